use std::path::Path;

use proptest::prelude::*;
use vacancy_ingest::parse_csv_table;
use vacancy_model::VacancyError;
use vacancy_stats::{
    OTHER_CITIES_LABEL, StatsVacancy, aggregate, aggregate_partitioned, stats_records,
};

fn record(name: &str, salary: i64, city: &str, year: i32) -> StatsVacancy {
    StatsVacancy {
        name: name.to_string(),
        salary,
        city: city.to_string(),
        year,
    }
}

#[test]
fn reads_full_and_part_layouts() {
    let full = "\
name,description,key_skills,experience_id,premium,employer_name,salary_from,salary_to,salary_gross,salary_currency,area_name,published_at
Инженер,Текст,Rust,noExperience,False,Контора,70000,80000,True,RUR,Артем,2022-07-06T02:03:11+0300
";
    let part = "\
name,salary_from,salary_to,salary_currency,area_name,published_at
Аналитик,4500,5500,EUR,Москва,2022-07-05T12:00:00+0300
";
    let full = parse_csv_table(full.as_bytes(), Path::new("full.csv")).unwrap();
    let part = parse_csv_table(part.as_bytes(), Path::new("part.csv")).unwrap();

    assert_eq!(
        stats_records(&full).unwrap(),
        vec![record("Инженер", 75_000, "Артем", 2022)]
    );
    assert_eq!(
        stats_records(&part).unwrap(),
        vec![record("Аналитик", 299_500, "Москва", 2022)]
    );
}

#[test]
fn unknown_currency_is_fatal() {
    let text = "\
name,salary_from,salary_to,salary_currency,area_name,published_at
Аналитик,4500,5500,GBP,Москва,2022-07-05T12:00:00+0300
";
    let table = parse_csv_table(text.as_bytes(), Path::new("part.csv")).unwrap();
    assert!(matches!(
        stats_records(&table),
        Err(VacancyError::UnknownCurrency { currency }) if currency == "GBP"
    ));
}

#[test]
fn two_vacancies_in_one_year() {
    let records = vec![
        record("Инженер", 75_000, "Артем", 2022),
        record("Аналитик", 299_500, "Москва", 2022),
    ];
    let stats = aggregate(&records, "Программист");

    assert_eq!(stats.salary_by_year[&2022], 187_250);
    assert_eq!(stats.count_by_year[&2022], 2);
    assert_eq!(stats.job_salary_by_year[&2022], 0);
    assert_eq!(stats.job_count_by_year[&2022], 0);
    assert_eq!(
        stats.salary_by_city,
        vec![("Москва".to_string(), 299_500), ("Артем".to_string(), 75_000)]
    );
    assert_eq!(
        stats.share_by_city,
        vec![("Артем".to_string(), 0.5), ("Москва".to_string(), 0.5)]
    );
}

#[test]
fn years_are_ascending_and_job_match_is_substring() {
    let records = vec![
        record("Старший программист", 100, "Москва", 2021),
        record("Программист", 300, "Москва", 2019),
        record("Тестировщик", 50, "Москва", 2021),
        record("программист", 900, "Москва", 2021),
    ];
    let stats = aggregate(&records, "рограммист");

    let years: Vec<i32> = stats.count_by_year.keys().copied().collect();
    assert_eq!(years, vec![2019, 2021]);
    assert_eq!(stats.count_by_year[&2021], 3);
    assert_eq!(stats.salary_by_year[&2021], 350);
    assert_eq!(stats.job_count_by_year[&2021], 2);
    assert_eq!(stats.job_salary_by_year[&2021], 500);
    assert_eq!(stats.job_count_by_year[&2019], 1);

    // Matching is case-sensitive.
    let stats = aggregate(&records, "Программист");
    assert_eq!(stats.job_count_by_year[&2021], 0);
}

#[test]
fn zero_average_is_ambiguous() {
    let records = vec![
        record("Волонтер", 0, "Москва", 2020),
        record("Инженер", 100, "Москва", 2021),
    ];
    let stats = aggregate(&records, "Волонтер");

    // A real zero salary and "no matching vacancy" both average to zero;
    // only the count tells them apart.
    assert_eq!(stats.job_salary_by_year[&2020], 0);
    assert_eq!(stats.job_count_by_year[&2020], 1);
    assert_eq!(stats.job_salary_by_year[&2021], 0);
    assert_eq!(stats.job_count_by_year[&2021], 0);
}

#[test]
fn cities_below_one_percent_are_dropped() {
    let mut records: Vec<StatsVacancy> = (0..100)
        .map(|_| record("Инженер", 1000, "Москва", 2022))
        .collect();
    records.push(record("Инженер", 5000, "Тверь", 2022));
    let stats = aggregate(&records, "Инженер");

    assert_eq!(stats.salary_by_city, vec![("Москва".to_string(), 1000)]);
    assert_eq!(stats.share_by_city, vec![("Москва".to_string(), 0.9901)]);
}

#[test]
fn other_bucket_sums_remaining_share() {
    let records: Vec<StatsVacancy> = (0..12)
        .map(|i| record("Инженер", 1000 * (i + 1), &format!("Город {i}"), 2022))
        .collect();
    let stats = aggregate(&records, "Инженер");

    assert_eq!(stats.salary_by_city.len(), 10);
    assert_eq!(stats.salary_by_city[0], ("Город 11".to_string(), 12_000));

    assert_eq!(stats.share_by_city.len(), 11);
    let names: Vec<&str> = stats.share_by_city[..10]
        .iter()
        .map(|(name, _)| name.as_str())
        .collect();
    let expected: Vec<String> = (0..10).map(|i| format!("Город {i}")).collect();
    assert_eq!(names, expected);
    assert!(
        stats.share_by_city[..10]
            .iter()
            .all(|(_, share)| *share == 0.0833)
    );
    let (label, other) = &stats.share_by_city[10];
    assert_eq!(label, OTHER_CITIES_LABEL);
    assert!((other - 0.167).abs() < 1e-9);
}

#[test]
fn ten_cities_get_no_other_bucket() {
    let records: Vec<StatsVacancy> = (0..10)
        .map(|i| record("Инженер", 1000, &format!("Город {i}"), 2022))
        .collect();
    let stats = aggregate(&records, "Инженер");
    assert_eq!(stats.share_by_city.len(), 10);
    assert!(
        stats
            .share_by_city
            .iter()
            .all(|(name, _)| name != OTHER_CITIES_LABEL)
    );
}

#[test]
fn empty_input_gives_empty_statistics() {
    let stats = aggregate(&[], "Инженер");
    assert!(stats.count_by_year.is_empty());
    assert!(stats.share_by_city.is_empty());
}

#[test]
fn statistics_serialize_to_json() {
    let records = vec![record("Инженер", 75_000, "Артем", 2022)];
    let json = serde_json::to_value(aggregate(&records, "Инженер")).unwrap();
    assert_eq!(json["salary_by_year"]["2022"], 75_000);
    assert_eq!(json["share_by_city"][0][0], "Артем");
    assert_eq!(json["share_by_city"][0][1], 1.0);
}

fn arb_record() -> impl Strategy<Value = StatsVacancy> {
    (
        prop::sample::select(vec!["Инженер", "Программист", "Аналитик"]),
        0i64..500_000,
        prop::sample::select(vec!["Москва", "Казань", "Артем", "Тверь", "Сочи"]),
        2018i32..2024,
    )
        .prop_map(|(name, salary, city, year)| record(name, salary, city, year))
}

proptest! {
    #[test]
    fn partitioned_matches_sequential(records in prop::collection::vec(arb_record(), 0..200)) {
        prop_assert_eq!(
            aggregate_partitioned(&records, "Программист"),
            aggregate(&records, "Программист")
        );
    }
}
