use super::*;

fn org(name: &str, budget: u64) -> Organism {
    Organism {
        name: name.to_string(),
        projects: 1,
        budget,
    }
}

fn nine() -> Vec<Organism> {
    vec![
        org("A", 100),
        org("B", 90),
        org("C", 80),
        org("D", 70),
        org("E", 60),
        org("F", 50),
        org("G", 40),
        org("H", 30),
        org("I", 20),
    ]
}

fn names(records: &[Organism]) -> Vec<&str> {
    records.iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn test_sort_is_non_increasing_permutation() {
    let input = vec![
        org("x", 5),
        org("y", 50),
        org("z", 0),
        org("w", 17),
        org("v", 50),
        org("y", 50),
        org("x", 5),
    ];
    let sorted = sort_descending_by_budget(&input);
    assert!(sorted.windows(2).all(|w| w[0].budget >= w[1].budget));
    let key = |r: &Organism| (r.name.clone(), r.budget);
    let mut expected = input.iter().map(key).collect::<Vec<_>>();
    let mut actual = sorted.iter().map(key).collect::<Vec<_>>();
    expected.sort();
    actual.sort();
    assert_eq!(actual, expected);
}

#[test]
fn test_sort_keeps_tie_order() {
    let input = vec![org("A", 10), org("B", 20), org("C", 10), org("D", 20)];
    let sorted = sort_descending_by_budget(&input);
    assert_eq!(names(&sorted), vec!["B", "D", "A", "C"]);
}

#[test]
fn test_top_and_others_scenario() {
    let sorted = sort_descending_by_budget(&nine());
    let part = top_and_others(&sorted, 7).unwrap();
    assert_eq!(names(&part.top), vec!["A", "B", "C", "D", "E", "F", "G"]);
    assert_eq!(part.others.budget, 50);
    assert_eq!(part.others.count, 2);
    assert_eq!(part.others.label, OTHERS_LABEL);
}

#[test]
fn test_top_and_others_preserves_total() {
    let sorted = sort_descending_by_budget(&nine());
    let total = total_budget(&sorted);
    for k in 1..=12 {
        let part = top_and_others(&sorted, k).unwrap();
        assert_eq!(part.top.len(), k.min(sorted.len()));
        assert_eq!(total_budget(&part.top) + part.others.budget, total);
    }
}

#[test]
fn test_top_and_others_small_input_has_empty_bucket() {
    let sorted = vec![org("A", 3), org("B", 2)];
    let part = top_and_others(&sorted, 7).unwrap();
    assert_eq!(part.top.len(), 2);
    assert_eq!(part.others.budget, 0);
    assert_eq!(part.others.count, 0);

    let empty: Vec<Organism> = Vec::new();
    let part = top_and_others(&empty, 1).unwrap();
    assert!(part.top.is_empty());
    assert_eq!(part.others.budget, 0);
}

#[test]
fn test_top_and_others_rejects_zero_k() {
    let err = top_and_others(&nine(), 0).unwrap_err();
    assert!(matches!(err, AggregateError::InvalidArgument(_)));
}

#[test]
fn test_percentage_guards() {
    for x in [0.0, 1.0, 42.5, 1e12] {
        assert_eq!(percentage_of(x, 0.0), 0.0);
    }
    for w in [1.0, 3.0, 5_748_807_390_801.0] {
        assert_eq!(percentage_of(0.0, w), 0.0);
        assert_eq!(percentage_of(w, w), 100.0);
    }
    assert_eq!(percentage_of(1.0, 8.0), 12.5);
}

#[test]
fn test_filter_empty_query_is_identity() {
    let input = nine();
    assert_eq!(filter_by_name_substring(&input, ""), input);
}

#[test]
fn test_filter_case_insensitive() {
    let input = vec![
        org("Secretaría de Salud Pública", 3),
        org("Secretaría de Educación", 2),
        org("DAGMA", 1),
    ];
    let upper = filter_by_name_substring(&input, "SALUD");
    let lower = filter_by_name_substring(&input, "salud");
    assert_eq!(upper, lower);
    assert_eq!(names(&upper), vec!["Secretaría de Salud Pública"]);

    let accented = filter_by_name_substring(&input, "SECRETARÍA");
    assert_eq!(accented.len(), 2);
    assert_eq!(names(&filter_by_name_substring(&input, "dagma")), vec!["DAGMA"]);
}

#[test]
fn test_filter_keeps_order_and_is_not_fuzzy() {
    let input = vec![org("Cultura", 1), org("Salud", 9), org("Culto", 5)];
    assert_eq!(
        names(&filter_by_name_substring(&input, "cult")),
        vec!["Cultura", "Culto"]
    );
    assert!(filter_by_name_substring(&input, "sld").is_empty());
}

#[test]
fn test_widths_against_reference() {
    let input = vec![org("A", 50), org("B", 25), org("C", 0)];
    assert_eq!(largest_budget(&input), 50);
    assert_eq!(relative_widths(&input, 50), vec![100.0, 50.0, 0.0]);
    assert_eq!(relative_widths(&input, 0), vec![0.0, 0.0, 0.0]);
    let empty: Vec<Organism> = Vec::new();
    assert_eq!(largest_budget(&empty), 0);
}

#[test]
fn test_total_budget_saturates() {
    let input = vec![org("A", u64::MAX), org("B", 10)];
    assert_eq!(total_budget(&input), u64::MAX);
}
