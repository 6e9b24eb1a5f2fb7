//! Integration tests for the create-rental use case

use std::sync::Arc;
use std::thread;

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use tempfile::tempdir;

use rentx_app::app::{CreateRentalRequest, CreateRentalUseCase, RegisterCarUseCase};
use rentx_app::repository::open_rental_repo_at;
use rentx_domain::model::{NewCar, NewRental};
use rentx_domain::repository::RentalRepository;
use rentx_infra::in_memory::{InMemoryCarRepository, InMemoryRentalRepository};
use rentx_infra::{FixedDateProvider, SystemDateProvider};
use rentx_types::DomainError;

type UseCase = CreateRentalUseCase<Arc<InMemoryRentalRepository>, FixedDateProvider>;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap()
}

fn tomorrow() -> DateTime<Utc> {
    now() + Duration::days(1)
}

fn setup() -> (Arc<InMemoryRentalRepository>, UseCase) {
    let rentals = Arc::new(InMemoryRentalRepository::new());
    let use_case = CreateRentalUseCase::new(Arc::clone(&rentals), FixedDateProvider::new(now()));
    (rentals, use_case)
}

fn seed_open_rental(rentals: &InMemoryRentalRepository, user_id: &str, car_id: &str) {
    rentals
        .create(NewRental {
            car_id: car_id.to_string(),
            user_id: user_id.to_string(),
            start_date: now(),
            expected_return_date: tomorrow(),
        })
        .unwrap();
}

fn request(user_id: &str, car_id: &str, expected_return_date: DateTime<Utc>) -> CreateRentalRequest {
    CreateRentalRequest {
        user_id: user_id.to_string(),
        car_id: car_id.to_string(),
        expected_return_date,
    }
}

#[test]
fn test_create_new_rental() {
    let (_, use_case) = setup();
    let cars = RegisterCarUseCase::new(InMemoryCarRepository::new());
    let car = cars
        .execute(NewCar {
            name: "test".to_string(),
            description: "test".to_string(),
            brand: "test".to_string(),
            category_id: "123".to_string(),
            fine_amount: 40.0,
            daily_rate: 100.0,
            license_plate: "test".to_string(),
        })
        .unwrap();

    let rental = use_case
        .execute(request("12345", &car.id, tomorrow()))
        .unwrap();

    assert!(!rental.id.is_empty());
    assert_eq!(rental.start_date, now());
    assert_eq!(rental.car_id, car.id);
    assert_eq!(rental.user_id, "12345");
    assert!(rental.is_open());
}

#[test]
fn test_reject_when_user_has_open_rental() {
    let (rentals, use_case) = setup();
    seed_open_rental(&rentals, "12345", "321");

    let err = use_case
        .execute(request("12345", "121212", tomorrow()))
        .unwrap_err();

    assert_eq!(err.to_string(), "There is a rental in progress for user!");
    assert_eq!(err.as_domain(), Some(DomainError::UserHasOpenRental));
}

#[test]
fn test_reject_when_car_has_open_rental() {
    let (rentals, use_case) = setup();
    seed_open_rental(&rentals, "421312", "123");

    // the seeded rental belongs to another user
    let err = use_case
        .execute(request("other-user", "123", tomorrow()))
        .unwrap_err();

    assert_eq!(err.to_string(), "Car is not available");
}

/// The holder of car "123" asks for car "123" again. Both the user and the
/// car checks apply; the user check runs first, so the holder is told about
/// their own rental rather than that the car is taken.
#[test]
fn test_holder_requesting_own_car_gets_user_rental_error() {
    let (rentals, use_case) = setup();
    seed_open_rental(&rentals, "421312", "123");

    let err = use_case
        .execute(request("421312", "123", tomorrow()))
        .unwrap_err();

    assert_eq!(err.to_string(), "There is a rental in progress for user!");
    assert_ne!(err.to_string(), "Car is not available");
    assert_eq!(rentals.find_by_user("421312").unwrap().len(), 1);
}

#[test]
fn test_reject_invalid_return_time() {
    let (_, use_case) = setup();

    let err = use_case.execute(request("321", "test", now())).unwrap_err();

    assert_eq!(err.to_string(), "Invalid return time");
    assert_eq!(err.as_domain().map(|e| e.status_code()), Some(422));
}

#[test]
fn test_second_rental_for_same_user_is_rejected() {
    let (rentals, use_case) = setup();

    assert!(use_case.execute(request("12345", "car-a", tomorrow())).is_ok());
    let err = use_case
        .execute(request("12345", "car-b", tomorrow()))
        .unwrap_err();

    assert_eq!(err.as_domain(), Some(DomainError::UserHasOpenRental));
    assert_eq!(rentals.find_by_user("12345").unwrap().len(), 1);
}

#[test]
fn test_system_clock_accepts_a_comfortable_margin() {
    let rentals = InMemoryRentalRepository::new();
    let use_case = CreateRentalUseCase::new(rentals, SystemDateProvider);

    let rental = use_case
        .execute(request("12345", "car", Utc::now() + Duration::hours(25)))
        .unwrap();

    assert!((Utc::now() - rental.start_date) < Duration::seconds(5));
}

#[test]
fn test_concurrent_requests_against_file_store() {
    let dir = tempdir().unwrap();
    let rentals = Arc::new(open_rental_repo_at(dir.path().to_path_buf()).unwrap());
    let use_case = Arc::new(CreateRentalUseCase::new(
        Arc::clone(&rentals),
        FixedDateProvider::new(now()),
    ));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let use_case = Arc::clone(&use_case);
            thread::spawn(move || {
                use_case.execute(request(&format!("user-{}", i), "shared-car", tomorrow()))
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let successes = results.iter().filter(|r| r.is_ok()).count();

    assert_eq!(successes, 1);
    for err in results.iter().filter_map(|r| r.as_ref().err()) {
        assert_eq!(err.as_domain(), Some(DomainError::CarUnavailable));
    }
    assert!(rentals.find_open_by_car("shared-car").unwrap().is_some());
    assert_eq!(rentals.count().unwrap(), 1);
}

#[test]
fn test_separate_file_store_handles_share_open_rentals() {
    let dir = tempdir().unwrap();
    let first = CreateRentalUseCase::new(
        open_rental_repo_at(dir.path().to_path_buf()).unwrap(),
        FixedDateProvider::new(now()),
    );
    let second = CreateRentalUseCase::new(
        open_rental_repo_at(dir.path().to_path_buf()).unwrap(),
        FixedDateProvider::new(now()),
    );

    let kept = first.execute(request("u", "c1", tomorrow())).unwrap();
    let err = second.execute(request("u", "c2", tomorrow())).unwrap_err();
    assert_eq!(err.as_domain(), Some(DomainError::UserHasOpenRental));

    let reopened = open_rental_repo_at(dir.path().to_path_buf()).unwrap();
    assert_eq!(reopened.find_by_user("u").unwrap(), vec![kept]);
}

fn id() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,12}"
}

proptest! {
    #[test]
    fn prop_user_with_open_rental_is_always_rejected(
        user in id(),
        car in id(),
        hours in -100i64..500,
    ) {
        let (rentals, use_case) = setup();
        seed_open_rental(&rentals, &user, "seeded-car");

        let err = use_case
            .execute(request(&user, &car, now() + Duration::hours(hours)))
            .unwrap_err();
        prop_assert_eq!(err.as_domain(), Some(DomainError::UserHasOpenRental));
    }

    #[test]
    fn prop_car_with_open_rental_is_always_rejected(car in id(), hours in 24i64..500) {
        let (rentals, use_case) = setup();
        seed_open_rental(&rentals, "holder", &car);

        let err = use_case
            .execute(request("newcomer", &car, now() + Duration::hours(hours)))
            .unwrap_err();
        prop_assert_eq!(err.as_domain(), Some(DomainError::CarUnavailable));
    }

    #[test]
    fn prop_short_rentals_are_rejected(minutes in -10_000i64..1440) {
        let (rentals, use_case) = setup();

        let err = use_case
            .execute(request("u", "c", now() + Duration::minutes(minutes)))
            .unwrap_err();
        prop_assert_eq!(err.as_domain(), Some(DomainError::InvalidReturnTime));
        prop_assert_eq!(rentals.count().unwrap(), 0);
    }

    #[test]
    fn prop_day_or_longer_is_accepted(minutes in 1440i64..100_000) {
        let (_, use_case) = setup();

        let rental = use_case
            .execute(request("u", "c", now() + Duration::minutes(minutes)))
            .unwrap();
        prop_assert!(!rental.id.is_empty());
        prop_assert_eq!(rental.start_date, now());
    }
}
