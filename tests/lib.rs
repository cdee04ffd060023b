// Integration tests test your crate's public API. They only have access to items
// in your crate that are marked pub. See the Cargo Targets page of the Cargo Book
// for more information.
//
//   https://doc.rust-lang.org/cargo/reference/cargo-targets.html#integration-tests
//

use smart_office_facility::*;


#[test]
fn test_core_id_types() {
    let first = BookingId::new();
    let second = BookingId::new();

    assert_ne!(first, second);
    assert!(first.to_string().starts_with("BOOK_"));
    assert_eq!(RoomNumber(7).to_string(), "7");
    assert_eq!("12".parse::<RoomNumber>().unwrap(), RoomNumber(12));
}

#[test]
fn test_reference_example() {
    let mut system = SmartOfficeSystem::new(OfficeFacility::new());

    assert_eq!(
        system.process_input("config room count 2"),
        "Office configured with 2 meeting rooms: Room 1, Room 2"
    );
    assert_eq!(
        system.process_input("add occupant 1 3"),
        "Room 1 is now occupied by 3 persons. AC and lights turned on."
    );
    assert_eq!(system.process_input("room status 1"), "Room 1 status: Occupied");
}

#[test]
fn test_error_categories() {
    let mut office = OfficeFacility::new();
    office.configure(1).unwrap();

    let missing = office.cancel_booking(RoomNumber(3)).unwrap_err();
    assert_eq!(missing.kind(), ErrorKind::NotFound);

    let state = office.cancel_booking(RoomNumber(1)).unwrap_err();
    assert_eq!(state.kind(), ErrorKind::InvalidState);
    assert!(state.is_recoverable());

    let parse = "block room 1 noon 30".parse::<Command>().unwrap_err();
    assert_eq!(parse.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_default_environment_systems() {
    let ac = EnvironmentSystem::air_conditioning();
    let lights = EnvironmentSystem::lighting();

    assert_eq!(ac.kind(), EnvironmentSystemKind::AirConditioning);
    assert_eq!(ac.action(true), "AC turned on.");
    assert_eq!(lights.action(false), "Lights turned off.");
}
