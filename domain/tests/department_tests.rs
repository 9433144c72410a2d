/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for department and report commands

mod common;

use common::*;
use domain::departments::*;
use domain::error::DataError;
use domain::input::InputError;
use domain::reports::*;

#[tokio::test]
async fn test_department_and_report_scenario() {
    let db = setup_db().await;

    let ti = create_department(
        &db,
        NewDepartment {
            name: "TI".to_string(),
            active: true,
        },
    )
    .await
    .unwrap();
    assert_eq!(ti.id, 1);
    assert_eq!(ti.name, "TI");
    assert!(ti.active);

    let report = create_report(
        &db,
        NewStandaloneReport {
            title: "Falha de rede".to_string(),
            description: None,
            department_id: Some(1),
        },
    )
    .await
    .unwrap();
    assert_eq!(report.id, 1);

    let (report, department) = get_report(&db, 1).await.unwrap();
    assert_eq!(report.department_id, 1);
    let department = department.unwrap();
    assert_eq!(department.id, 1);
    assert_eq!(department.name, "TI");

    let err = add_reports_to_department(
        &db,
        99,
        vec![NewReport {
            title: "Impressora".to_string(),
            description: None,
        }],
    )
    .await
    .unwrap_err();
    assert!(matches!(err, DataError::NotFound("Department")));
}

#[tokio::test]
async fn test_create_department_rejects_blank_name() {
    let db = setup_db().await;

    let err = create_department(
        &db,
        NewDepartment {
            name: "   ".to_string(),
            active: true,
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err,
        DataError::Validation(InputError::Required("name"))
    ));
    assert!(list_departments(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_report_validation() {
    let db = setup_db().await;
    let ti = department(&db, "TI").await;

    let err = create_report(
        &db,
        NewStandaloneReport {
            title: "".to_string(),
            description: None,
            department_id: Some(ti.id),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(
        err,
        DataError::Validation(InputError::Required("title"))
    ));

    let err = create_report(
        &db,
        NewStandaloneReport {
            title: "Falha de rede".to_string(),
            description: None,
            department_id: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(
        err,
        DataError::Validation(InputError::Required("department_id"))
    ));

    let err = create_report(
        &db,
        NewStandaloneReport {
            title: "Falha de rede".to_string(),
            description: None,
            department_id: Some(99),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, DataError::Validation(InputError::Invalid(_))));

    assert!(list_reports(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_add_reports_to_department() {
    let db = setup_db().await;
    let ti = department(&db, "TI").await;
    let rh = department(&db, "RH").await;
    report(&db, "Ferias", rh.id).await;

    let reports = add_reports_to_department(
        &db,
        ti.id,
        vec![
            NewReport {
                title: "Falha de rede".to_string(),
                description: Some("Switch do andar 2".to_string()),
            },
            NewReport {
                title: "Impressora".to_string(),
                description: None,
            },
        ],
    )
    .await
    .unwrap();

    assert_eq!(reports.len(), 2);
    assert!(reports.iter().all(|r| r.department_id == ti.id));
    assert_eq!(reports[0].description.as_deref(), Some("Switch do andar 2"));

    let departments = list_departments(&db).await.unwrap();
    assert_eq!(departments.len(), 2);
    assert_eq!(departments[0].0.name, "TI");
    assert_eq!(departments[0].1.len(), 2);
    assert_eq!(departments[1].0.name, "RH");
    assert_eq!(departments[1].1.len(), 1);
}

#[tokio::test]
async fn test_add_reports_is_all_or_nothing() {
    let db = setup_db().await;
    let ti = department(&db, "TI").await;

    let err = add_reports_to_department(
        &db,
        ti.id,
        vec![
            NewReport {
                title: "Falha de rede".to_string(),
                description: None,
            },
            NewReport {
                title: " ".to_string(),
                description: None,
            },
        ],
    )
    .await
    .unwrap_err();
    assert!(matches!(err, DataError::Validation(_)));

    let err = add_reports_to_department(&db, ti.id, vec![])
        .await
        .unwrap_err();
    assert!(matches!(err, DataError::Validation(InputError::Invalid(_))));

    let (_, reports) = get_department(&db, ti.id).await.unwrap();
    assert!(reports.is_empty());
}

#[tokio::test]
async fn test_get_department_not_found() {
    let db = setup_db().await;

    let err = get_department(&db, 42).await.unwrap_err();
    assert!(matches!(err, DataError::NotFound("Department")));

    let err = get_report(&db, 42).await.unwrap_err();
    assert!(matches!(err, DataError::NotFound("Report")));
}

#[tokio::test]
async fn test_delete_department_is_restricted() {
    let db = setup_db().await;
    let ti = department(&db, "TI").await;
    let rh = department(&db, "RH").await;
    report(&db, "Falha de rede", ti.id).await;

    let err = delete_department(&db, ti.id).await.unwrap_err();
    assert!(matches!(err, DataError::Integrity(_)));
    assert!(get_department(&db, ti.id).await.is_ok());

    delete_department(&db, rh.id).await.unwrap();
    assert!(matches!(
        get_department(&db, rh.id).await.unwrap_err(),
        DataError::NotFound(_)
    ));

    assert!(matches!(
        delete_department(&db, rh.id).await.unwrap_err(),
        DataError::NotFound(_)
    ));
}
