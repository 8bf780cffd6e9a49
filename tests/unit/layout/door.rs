//! Tests for door types, their flag sets and metadata

#[cfg(test)]
mod tests {
    use donjon::layout::door::{Door, DoorType};
    use donjon::spatial::attributes::{CellAttribute, CellAttributes};

    // Tests every door type keeps the arch flag
    #[test]
    fn test_arch_flag_always_set() {
        for door_type in DoorType::ALL {
            assert!(door_type.flags().arch, "{door_type} lost its arch flag");
        }
    }

    // Tests the distinguishing flags of each type
    #[test]
    fn test_flag_sets() {
        let arch = DoorType::Arch.flags();
        assert!(!arch.door && !arch.wall && !arch.portc);

        assert!(DoorType::Open.flags().door);
        assert!(!DoorType::Open.flags().lock);

        let lock = DoorType::Lock.flags();
        assert!(lock.door && lock.lock && !lock.trap);

        let trap = DoorType::Trap.flags();
        assert!(trap.door && trap.trap && !trap.lock);

        let secret = DoorType::Secret.flags();
        assert!(secret.wall && secret.secret && !secret.door);

        let portc = DoorType::Portc.flags();
        assert!(portc.portc && !portc.door);
    }

    // Tests each type stamps a distinct door-space attribute
    #[test]
    fn test_cell_attributes_are_door_space() {
        let mut seen = CellAttributes::empty();
        for door_type in DoorType::ALL {
            let attribute = door_type.cell_attribute();
            assert!(CellAttributes::door_space().contains(attribute));
            assert!(!seen.contains(attribute));
            seen.insert(attribute);
        }
        assert_eq!(DoorType::Open.cell_attribute(), CellAttribute::Door);
    }

    // Tests names and keys
    #[test]
    fn test_names() {
        assert_eq!(DoorType::Arch.name(), "Archway");
        assert_eq!(DoorType::Portc.key(), "portc");
        assert_eq!(DoorType::Lock.to_string(), "Locked Door");
    }

    // Tests doors are plain copyable values
    #[test]
    fn test_door_value() {
        let door = Door {
            row: 4,
            col: 7,
            out_id: Some(2),
            door_type: DoorType::Secret,
        };
        let copy = door;
        assert_eq!(copy, door);
        assert_eq!(copy.out_id, Some(2));
    }
}
