// Unit tests for error mapping - pure domain logic without transport or store
use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::{AppError, ErrorCode};

#[test]
fn maps_rule_validations() {
    let cases = [
        (ValidationKind::SessionNotActive, ErrorCode::SessionNotActive),
        (ValidationKind::SessionExpired, ErrorCode::SessionExpired),
        (ValidationKind::NotYourTurn, ErrorCode::NotYourTurn),
        (ValidationKind::InvalidInput, ErrorCode::InvalidInput),
        (
            ValidationKind::Other("WHATEVER".into()),
            ErrorCode::InvalidInput,
        ),
    ];
    for (kind, expected) in cases {
        let app: AppError = DomainError::validation(kind, "rejected").into();
        assert_eq!(app.code(), expected);
        assert!(!app.is_internal());
        assert_eq!(app.detail(), "rejected");
    }
}

#[test]
fn maps_conflicts() {
    let queued = DomainError::conflict(ConflictKind::AlreadyQueued, "queued");
    let app: AppError = queued.into();
    assert_eq!(app.code().as_str(), "ALREADY_QUEUED");

    let lock = DomainError::conflict(ConflictKind::OptimisticLock, "stale");
    let app: AppError = lock.into();
    assert_eq!(app.code(), ErrorCode::OptimisticLock);

    // Test generic conflict fallback
    let other = DomainError::conflict(ConflictKind::Other("x".to_string()), "generic");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "CONFLICT");
}

#[test]
fn maps_not_found() {
    let app: AppError = DomainError::session_not_found(42).into();
    assert_eq!(app.code(), ErrorCode::SessionNotFound);
    assert!(app.detail().contains("42"));

    let app: AppError = DomainError::not_found(NotFoundKind::Token, "no token").into();
    assert_eq!(app.code(), ErrorCode::TokenNotFound);
}

#[test]
fn maps_infra_to_internal_class() {
    let app: AppError = DomainError::infra(InfraErrorKind::Store, "disk on fire").into();
    assert_eq!(app.code(), ErrorCode::StoreError);
    assert!(app.is_internal());

    let app: AppError = DomainError::data_corruption("bad json").into();
    assert_eq!(app.code(), ErrorCode::DataCorruption);
    assert!(app.is_internal());
}

#[test]
fn serde_failures_become_data_corruption() {
    let err = serde_json::from_str::<u8>("not json").unwrap_err();
    let de: DomainError = err.into();
    assert!(matches!(
        de,
        DomainError::Infra(InfraErrorKind::DataCorruption, _)
    ));
}
