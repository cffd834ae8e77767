//! End-to-end behaviour of the visitor/park/trip model

use parkbook_core::{Error, ParkId, ValidationError, World};

#[test]
fn test_visitor_names_within_bounds() {
    let mut world = World::new();
    for len in 1..=15 {
        let name = "a".repeat(len);
        let id = world.add_visitor(name.clone()).unwrap();
        assert_eq!(world.visitor(id).unwrap().name(), name);
    }

    for name in [String::new(), "a".repeat(16), "a".repeat(40)] {
        let err = world.add_visitor(name).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::VisitorNameLength { .. })
        ));
    }
    assert_eq!(world.visitors().len(), 15);
}

#[test]
fn test_rename_visitor_through_world() {
    let mut world = World::new();
    let id = world.add_visitor("Steve").unwrap();

    world.visitor_mut(id).unwrap().set_name("Jess").unwrap();
    assert_eq!(world.visitor(id).unwrap().name(), "Jess");

    assert!(world.visitor_mut(id).unwrap().set_name("").is_err());
    assert_eq!(world.visitor(id).unwrap().name(), "Jess");
}

#[test]
fn test_park_names() {
    let mut world = World::new();
    assert!(world.add_park("Zion").is_ok());
    assert!(world.add_park("Yellowstone").is_ok());
    assert!(world.add_park("Ab").is_err());
    // Failed constructions never reach the registry
    assert_eq!(world.parks().len(), 2);
}

#[test]
fn test_trip_appends_one_entry_to_each_list() {
    let mut world = World::new();
    let v = world.add_visitor("Steve").unwrap();
    let p = world.add_park("Yosemite").unwrap();
    world.add_trip(v, p, "May 1st", "May 2nd").unwrap();

    let before = (
        world.visitor_trips(v).count(),
        world.park_trips(p).count(),
        world.trips().len(),
    );
    let trip = world.add_trip(v, p, "July 4th", "July 9th").unwrap();

    assert_eq!(world.visitor_trips(v).count(), before.0 + 1);
    assert_eq!(world.park_trips(p).count(), before.1 + 1);
    assert_eq!(world.trips().len(), before.2 + 1);

    assert_eq!(world.visitor_trips(v).last().unwrap().id(), trip);
    assert_eq!(world.park_trips(p).last().unwrap().id(), trip);
    assert_eq!(world.trips().last().unwrap().id(), trip);

    let t = world.trip(trip).unwrap();
    assert_eq!(t.visitor(), v);
    assert_eq!(t.national_park(), p);
    assert_eq!(t.duration(), Some(6));
}

#[test]
fn test_trip_date_lengths() {
    let mut world = World::new();
    let v = world.add_visitor("Steve").unwrap();
    let p = world.add_park("Yosemite").unwrap();

    assert!(world.add_trip(v, p, "Jul", "July 9th").is_err());
    assert!(world.add_trip(v, p, "July 4th", "Jul").is_err());
    assert!(world.add_trip(v, p, "July 4th", "July 9th").is_ok());
    assert_eq!(world.trips().len(), 1);
}

#[test]
fn test_edit_trip_dates() {
    let mut world = World::new();
    let v = world.add_visitor("Steve").unwrap();
    let p = world.add_park("Yosemite").unwrap();
    let id = world.add_trip(v, p, "July 4th", "July 9th").unwrap();

    let trip = world.trip_mut(id).unwrap();
    trip.set_end_date("July 14th").unwrap();
    assert!(trip.set_start_date("Jul").is_err());

    let trip = world.trip(id).unwrap();
    assert_eq!(trip.start_date(), "July 4th");
    assert_eq!(trip.end_date(), "July 14th");
    assert_eq!(trip.duration(), Some(11));
}

#[test]
fn test_referential_symmetry() {
    let mut world = World::new();
    let a = world.add_visitor("Ann").unwrap();
    let b = world.add_visitor("Bo").unwrap();
    let zion = world.add_park("Zion").unwrap();
    let acadia = world.add_park("Acadia").unwrap();

    world.add_trip(a, zion, "June 1st", "June 3rd").unwrap();
    world.add_trip(b, acadia, "June 1st", "June 3rd").unwrap();
    world.add_trip(a, acadia, "June 5th", "June 8th").unwrap();

    for visitor in world.visitors() {
        for trip in world.visitor_trips(visitor.id()) {
            assert_eq!(trip.visitor(), visitor.id());
        }
    }
    for park in world.parks() {
        for trip in world.park_trips(park.id()) {
            assert_eq!(trip.national_park(), park.id());
        }
    }

    let visitors = world.park_visitors(acadia);
    assert_eq!(visitors.len(), 2);
    assert!(visitors.contains(&a) && visitors.contains(&b));
}

#[test]
fn test_best_visitor_and_most_visited() {
    let mut world = World::new();
    assert_eq!(world.most_visited(), None);

    let v1 = world.add_visitor("Ann").unwrap();
    let v2 = world.add_visitor("Bo").unwrap();
    let a = world.add_park("Arches").unwrap();
    let b = world.add_park("Badlands").unwrap();

    for visitor in [v1, v1, v2] {
        world.add_trip(visitor, a, "July 4th", "July 9th").unwrap();
    }
    for _ in 0..5 {
        world.add_trip(v2, b, "July 4th", "July 9th").unwrap();
    }

    assert_eq!(world.total_visits(a), 3);
    assert_eq!(world.total_visits(b), 5);
    assert_eq!(world.best_visitor(a), Some(v1));
    assert_eq!(world.best_visitor(b), Some(v2));
    assert_eq!(world.most_visited(), Some(b));
}

#[test]
fn test_worlds_are_isolated() {
    let mut first = World::new();
    let mut second = World::new();
    first.add_park("Yosemite").unwrap();

    assert_eq!(first.parks().len(), 1);
    assert!(second.parks().is_empty());
    assert_eq!(second.most_visited(), None);

    let v = second.add_visitor("Steve").unwrap();
    assert_eq!(
        second.add_trip(v, ParkId(0), "July 4th", "July 9th"),
        Err(Error::ParkNotFound(ParkId(0)))
    );
}

#[test]
fn test_world_serializes() {
    let mut world = World::new();
    let v = world.add_visitor("Steve").unwrap();
    let p = world.add_park("Yosemite").unwrap();
    world.add_trip(v, p, "July 4th", "July 9th").unwrap();

    let json = serde_json::to_value(&world).unwrap();
    assert_eq!(json["visitors"][0]["name"], "Steve");
    assert_eq!(json["parks"][0]["trips"][0], 0);
    assert_eq!(json["trips"][0]["national_park"], 0);
    assert_eq!(json["trips"][0]["start_date"], "July 4th");
}
