// Property-based tests for grid painting

use proptest::prelude::*;
use squad_scheduler::models::slot::{CellKey, Slot, SlotStatus};
use squad_scheduler::services::grid::GridModel;
use squad_scheduler::services::paint::{PaintController, PaintMode};

fn status_strategy() -> impl Strategy<Value = SlotStatus> {
    prop_oneof![
        Just(SlotStatus::Available),
        Just(SlotStatus::Committed),
        Just(SlotStatus::Blocked),
        Just(SlotStatus::Freed),
    ]
}

fn template_strategy() -> impl Strategy<Value = Vec<Slot>> {
    prop::collection::vec(
        (0..7u8, 0..24u8, status_strategy()).prop_map(|(day, hour, status)| Slot::new(day, hour, status)),
        0..40,
    )
}

fn cell_strategy() -> impl Strategy<Value = CellKey> {
    (0..7u8, 0..24u8).prop_map(|(day, hour)| CellKey::new(day, hour).unwrap())
}

proptest! {
    /// Property: clicking a paintable inactive/available cell twice restores it
    #[test]
    fn prop_double_click_restores_status(slots in template_strategy(), target in cell_strategy()) {
        let mut grid = GridModel::from_slots(&slots).unwrap();
        let original = grid.status(target);
        prop_assume!(original == SlotStatus::Inactive || original == SlotStatus::Available);

        let mut controller = PaintController::new();
        controller.pointer_down(&mut grid, target);
        controller.pointer_up();
        controller.pointer_down(&mut grid, target);
        controller.pointer_up();

        prop_assert_eq!(grid.status(target), original);
    }

    /// Property: committed and blocked cells never change the emitted set
    #[test]
    fn prop_locked_cells_are_never_painted(
        mut slots in template_strategy(),
        target in cell_strategy(),
        locked in prop_oneof![Just(SlotStatus::Committed), Just(SlotStatus::Blocked)],
    ) {
        slots.push(Slot::new(target.day_of_week, target.hour, locked));
        let mut grid = GridModel::from_slots(&slots).unwrap();
        let before = grid.to_slots();

        let mut controller = PaintController::new();
        prop_assert!(controller.pointer_down(&mut grid, target).is_none());
        prop_assert_eq!(grid.to_slots(), before);
    }

    /// Property: a drag over N paintable cells emits N cumulative sets
    #[test]
    fn prop_drag_emits_once_per_paintable_cell(
        slots in template_strategy(),
        path in prop::collection::btree_set(cell_strategy(), 1..20),
    ) {
        let mut grid = GridModel::from_slots(&slots).unwrap();
        let original = grid.clone();
        let path: Vec<CellKey> = path.into_iter().collect();
        prop_assume!(grid.is_paintable(path[0]));

        let mode = PaintMode::for_status(grid.status(path[0]));
        let mut controller = PaintController::new();
        let mut emissions = Vec::new();
        emissions.extend(controller.pointer_down(&mut grid, path[0]));
        for key in &path[1..] {
            emissions.extend(controller.pointer_enter(&mut grid, *key));
        }
        controller.pointer_up();

        let paintable = path.iter().filter(|key| original.is_paintable(**key)).count();
        prop_assert_eq!(emissions.len(), paintable);

        let last = GridModel::from_slots(emissions.last().unwrap()).unwrap();
        for day in 0..7u8 {
            for hour in 0..24u8 {
                let key = CellKey::new(day, hour).unwrap();
                let expected = if path.contains(&key) && original.is_paintable(key) {
                    mode.target_status()
                } else {
                    original.status(key)
                };
                prop_assert_eq!(last.status(key), expected);
            }
        }
    }
}
