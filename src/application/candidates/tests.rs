use super::*;
use crate::domain::{Candidate, CandidateError, Decision, HrAction, ListingError, Stage};
use std::str::FromStr;
use std::sync::Arc;

fn candidate(reference: &str, name: &str, score: u8, age: u32, job_ref: &str) -> Arc<Candidate> {
    Arc::new(Candidate {
        id: format!("id-{reference}"),
        reference: reference.to_string(),
        name: name.to_string(),
        position: "Analyst".to_string(),
        job_ref: job_ref.to_string(),
        age,
        matching_score: score,
        ..Default::default()
    })
}

fn refs(rows: &[Arc<Candidate>]) -> Vec<&str> {
    rows.iter().map(|c| c.reference.as_str()).collect()
}

fn twelve() -> CandidateList {
    (0..12)
        .map(|i| candidate(&format!("C{i:02}"), &format!("Name {i:02}"), 50, 30, "JOB-1"))
        .collect()
}

#[test]
fn test_empty_search_with_all_filter_is_identity() {
    let list = vec![
        candidate("A", "Zed", 70, 40, "JOB-1"),
        candidate("B", "Amy", 95, 25, "JOB-2"),
        candidate("C", "Bob", 82, 33, "JOB-1"),
    ];
    let query = CandidateQuery {
        sort: SortKey::Unsorted,
        ..Default::default()
    };
    let out = filter_and_sort(&list, &query);
    assert_eq!(refs(&out), vec!["A", "B", "C"]);
    assert!(out.iter().zip(&list).all(|(a, b)| Arc::ptr_eq(a, b)));
}

#[test]
fn test_search_matches_name_or_position_case_insensitively() {
    let mut designer = (*candidate("D", "Omar", 60, 31, "JOB-1")).clone();
    designer.position = "UX Designer".into();
    let list = vec![
        candidate("A", "Fatima Zahra", 70, 40, "JOB-1"),
        Arc::new(designer),
    ];

    let query = CandidateQuery {
        search: "DESIGN".into(),
        ..Default::default()
    };
    assert_eq!(refs(&filter_and_sort(&list, &query)), vec!["D"]);

    let query = CandidateQuery {
        search: "zahra".into(),
        ..Default::default()
    };
    assert_eq!(refs(&filter_and_sort(&list, &query)), vec!["A"]);
}

#[test]
fn test_job_filter_keeps_only_exact_reference() {
    let list = vec![
        candidate("A", "Zed", 70, 40, "JOB-1"),
        candidate("B", "Amy", 95, 25, "JOB-2"),
        candidate("C", "Bob", 82, 33, "JOB-10"),
    ];
    let query = CandidateQuery {
        job: JobFilter::from_str("JOB-1").unwrap(),
        ..Default::default()
    };
    let out = filter_and_sort(&list, &query);
    assert_eq!(refs(&out), vec!["A"]);
    assert!(out.iter().all(|c| c.job_ref == "JOB-1"));
    assert_eq!(JobFilter::from_str("all").unwrap(), JobFilter::All);
}

#[test]
fn test_score_desc_and_asc_are_reverses() {
    let list = vec![
        candidate("A", "A", 70, 40, "J"),
        candidate("B", "B", 95, 25, "J"),
        candidate("C", "C", 82, 33, "J"),
        candidate("D", "D", 12, 33, "J"),
    ];
    let desc = filter_and_sort(&list, &CandidateQuery::default());
    let asc = filter_and_sort(
        &list,
        &CandidateQuery {
            direction: SortDirection::Asc,
            ..Default::default()
        },
    );
    let mut reversed = refs(&asc);
    reversed.reverse();
    assert_eq!(refs(&desc), reversed);
    assert_eq!(refs(&desc), vec!["B", "C", "A", "D"]);
}

#[test]
fn test_sort_is_stable_for_equal_keys() {
    let list = vec![
        candidate("A", "A", 80, 40, "J"),
        candidate("B", "B", 80, 25, "J"),
        candidate("C", "C", 90, 33, "J"),
    ];
    let out = filter_and_sort(&list, &CandidateQuery::default());
    assert_eq!(refs(&out), vec!["C", "A", "B"]);
}

#[test]
fn test_name_and_age_sort_ascending() {
    let list = vec![
        candidate("A", "zainab", 70, 40, "J"),
        candidate("B", "Amir", 95, 25, "J"),
        candidate("C", "Bilal", 82, 33, "J"),
    ];
    let by_name = CandidateQuery {
        sort: SortKey::Name,
        direction: SortKey::Name.default_direction(),
        ..Default::default()
    };
    assert_eq!(refs(&filter_and_sort(&list, &by_name)), vec!["B", "C", "A"]);

    let by_age = CandidateQuery {
        sort: SortKey::Age,
        direction: SortKey::Age.default_direction(),
        ..Default::default()
    };
    assert_eq!(refs(&filter_and_sort(&list, &by_age)), vec!["B", "C", "A"]);
}

#[test]
fn test_name_sort_ignores_accents_and_case() {
    let list = vec![
        candidate("Z", "Zed", 70, 40, "J"),
        candidate("E", "Émile", 80, 30, "J"),
        candidate("A", "Adam", 90, 20, "J"),
        candidate("O", "ömer", 60, 35, "J"),
        candidate("e", "emile", 65, 28, "J"),
    ];
    let asc = CandidateQuery {
        sort: SortKey::Name,
        direction: SortDirection::Asc,
        ..Default::default()
    };
    assert_eq!(
        refs(&filter_and_sort(&list, &asc)),
        vec!["A", "e", "E", "O", "Z"]
    );

    let desc = CandidateQuery {
        direction: SortDirection::Desc,
        ..asc
    };
    assert_eq!(
        refs(&filter_and_sort(&list, &desc)),
        vec!["Z", "O", "E", "e", "A"]
    );
}

#[test]
fn test_unknown_sort_key_keeps_input_order() {
    let list = vec![
        candidate("A", "A", 10, 40, "J"),
        candidate("B", "B", 95, 25, "J"),
    ];
    let query = CandidateQuery {
        sort: SortKey::from_str("experience").unwrap(),
        ..Default::default()
    };
    assert_eq!(query.sort, SortKey::Unsorted);
    assert_eq!(refs(&filter_and_sort(&list, &query)), vec!["A", "B"]);
}

#[test]
fn test_pagination_over_twelve_rows() {
    let list = twelve();
    let query = CandidateQuery {
        sort: SortKey::Unsorted,
        ..Default::default()
    };
    let mut pager = Pager::new(5).unwrap();

    let page = derive_page(&list, &query, &pager);
    assert_eq!(page.total_pages, 3);
    assert_eq!(refs(&page.rows), vec!["C00", "C01", "C02", "C03", "C04"]);
    assert_eq!(page.showing(), Some((1, 5)));

    pager.go_to(3, page.total_count).unwrap();
    let page = derive_page(&list, &query, &pager);
    assert_eq!(refs(&page.rows), vec!["C10", "C11"]);
    assert_eq!(page.showing(), Some((11, 12)));

    let err = pager.go_to(4, page.total_count).unwrap_err();
    assert_eq!(
        err,
        ListingError::PageOutOfRange {
            requested: 4,
            total_pages: 3
        }
    );
    assert_eq!(pager.current_page(), 3);
    assert!(pager.go_to(0, page.total_count).is_err());
    assert_eq!(pager.current_page(), 3);
}

#[test]
fn test_total_pages_is_zero_without_results() {
    let pager = Pager::default();
    assert_eq!(pager.total_pages(0), 0);
    let page = derive_page(
        &[],
        &CandidateQuery::default(),
        &pager,
    );
    assert!(page.rows.is_empty());
    assert_eq!(page.total_pages, 0);
    assert_eq!(page.showing(), None);
    assert_eq!(Pager::new(0), Err(ListingError::InvalidPageSize));
}

#[test]
fn test_set_hr_action_is_idempotent_and_local() {
    let list = vec![
        candidate("A", "A", 70, 40, "J"),
        candidate("B", "B", 95, 25, "J"),
    ];
    let once = set_hr_action(&list, "A", HrAction::Reject).unwrap();
    let twice = set_hr_action(&once, "A", HrAction::Reject).unwrap();
    assert_eq!(once, twice);
    assert_eq!(once[0].hr_action, HrAction::Reject);
    assert_eq!(once[1].hr_action, HrAction::NotReviewed);
    assert!(Arc::ptr_eq(&once[1], &list[1]));
    // The input snapshot is untouched.
    assert_eq!(list[0].hr_action, HrAction::NotReviewed);
}

#[test]
fn test_set_decision_records_reason() {
    let list = vec![candidate("A", "A", 70, 40, "J")];
    let out = set_decision(&list, "A", Decision::Rejected, Some("Position filled")).unwrap();
    assert_eq!(out[0].decision, Decision::Rejected);
    assert_eq!(out[0].decision_reason.as_deref(), Some("Position filled"));

    let out = set_decision(&out, "A", Decision::Hired, None).unwrap();
    assert_eq!(out[0].decision, Decision::Hired);
    assert_eq!(out[0].decision_reason, None);
}

#[test]
fn test_set_stage_accepts_any_transition() {
    let list = vec![candidate("A", "A", 70, 40, "J")];
    for from in Stage::ALL {
        let start = set_stage(&list, "id-A", from).unwrap();
        for to in Stage::ALL {
            let out = set_stage(&start, "id-A", to).unwrap();
            assert_eq!(out[0].stage, to);
        }
    }
    let hired = set_stage(&list, "id-A", Stage::Hired).unwrap();
    let back = set_stage(&hired, "id-A", Stage::New).unwrap();
    assert_eq!(back[0].stage, Stage::New);
}

#[test]
fn test_advance_stage_stops_at_hired() {
    let list = vec![candidate("A", "A", 70, 40, "J")];
    let out = advance_stage(&list, "id-A").unwrap();
    assert_eq!(out[0].stage, Stage::UnderReview);

    let hired = set_stage(&list, "id-A", Stage::Hired).unwrap();
    let out = advance_stage(&hired, "id-A").unwrap();
    assert_eq!(out[0].stage, Stage::Hired);
}

#[test]
fn test_unknown_reference_is_not_found() {
    let list = vec![candidate("A", "A", 70, 40, "J")];
    assert!(matches!(
        set_hr_action(&list, "Z", HrAction::Shortlist),
        Err(CandidateError::NotFound(r)) if r == "Z"
    ));
    assert!(matches!(
        advance_stage(&list, "missing"),
        Err(CandidateError::NotFound(_))
    ));
}

#[test]
fn test_group_by_stage_has_every_column() {
    let list = vec![
        candidate("A", "A", 70, 40, "J"),
        candidate("B", "B", 95, 25, "J"),
    ];
    let list = set_stage(&list, "id-B", Stage::Offer).unwrap();
    let columns = group_by_stage(&list);
    assert_eq!(columns.len(), Stage::ALL.len());
    assert_eq!(refs(&columns[&Stage::New]), vec!["A"]);
    assert_eq!(refs(&columns[&Stage::Offer]), vec!["B"]);
    assert!(columns[&Stage::Hired].is_empty());
}

#[test]
fn test_rank_then_shortlist_scenario() {
    let list = vec![
        candidate("A", "A", 70, 40, "J"),
        candidate("B", "B", 95, 25, "J"),
        candidate("C", "C", 82, 33, "J"),
    ];
    let ranked = filter_and_sort(&list, &CandidateQuery::default());
    assert_eq!(refs(&ranked), vec!["B", "C", "A"]);

    let updated = set_hr_action(&list, "A", HrAction::Shortlist).unwrap();
    assert_eq!(updated[0].hr_action, HrAction::Shortlist);
    assert!(Arc::ptr_eq(&updated[1], &list[1]));
    assert!(Arc::ptr_eq(&updated[2], &list[2]));
    assert_eq!(*updated[1], *list[1]);
}
