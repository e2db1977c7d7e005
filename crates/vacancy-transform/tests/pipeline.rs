use std::path::Path;

use vacancy_ingest::parse_csv_table;
use vacancy_model::{Field, Vacancy, VacancyError};
use vacancy_transform::{
    QueryInput, SortCriterion, TableQuery, normalize_table, prepare_table, sort_vacancies,
};

const CORPUS: &str = "\
name,description,key_skills,experience_id,premium,employer_name,salary_from,salary_to,salary_gross,salary_currency,area_name,published_at
Программист,<p>Пишем   код</p>,\"Rust\nSQL\",between1And3,False,Контора,70000,80000,True,RUR,Артем,2022-07-06T02:03:11+0300
Аналитик,Считаем,\"SQL\nExcel\nPython\",between3And6,True,Банк,4500,5500,False,EUR,Москва,2022-07-05T12:00:00+0300
Стажер,Учимся,Git,noExperience,False,Контора,20000,30000,False,RUR,Казань,2021-01-10T09:00:00+0300
Архитектор,Проектируем,\"Rust\nKafka\nSQL\nK8s\",moreThan6,True,Банк,3000,4000,True,USD,Москва,2020-12-31T23:00:00+0000
";

const HEADER: &str = "name,description,key_skills,experience_id,premium,employer_name,salary_from,salary_to,salary_gross,salary_currency,area_name,published_at";

fn load(csv: &str) -> Vec<Vacancy> {
    let table = parse_csv_table(csv.as_bytes(), Path::new("corpus.csv")).unwrap();
    normalize_table(&table).unwrap()
}

fn vacancies() -> Vec<Vacancy> {
    load(CORPUS)
}

fn filter_error(filter: &str) -> VacancyError {
    let query = TableQuery::parse(&QueryInput {
        filter: filter.to_string(),
        ..QueryInput::default()
    })
    .unwrap();
    prepare_table(vacancies(), &query).unwrap_err()
}

fn run(filter: &str, sort: &str, reverse: &str, range: &str) -> Vec<String> {
    let input = QueryInput {
        filter: filter.to_string(),
        sort: sort.to_string(),
        reverse: reverse.to_string(),
        range: range.to_string(),
        columns: String::new(),
    };
    let query = TableQuery::parse(&input).unwrap();
    prepare_table(vacancies(), &query)
        .unwrap()
        .rows
        .into_iter()
        .map(|row| row.vacancy.name)
        .collect()
}

#[test]
fn normalizes_markup_and_lookups() {
    let vacancies = vacancies();
    assert_eq!(vacancies[0].description, "Пишем код");
    assert_eq!(vacancies[3].key_skills, vec!["Rust", "Kafka", "SQL", "K8s"]);

    let display = vacancy_transform::to_display(&vacancies[3]);
    assert_eq!(display.experience, "Более 6 лет");
    assert_eq!(display.premium, "Да");
    assert_eq!(display.published_at, "31.12.2020");
    insta::assert_snapshot!(display.salary, @"3 000 - 4 000 (Доллары) (Без вычета налогов)");
}

#[test]
fn no_query_keeps_input_order() {
    assert_eq!(
        run("", "", "", ""),
        vec!["Программист", "Аналитик", "Стажер", "Архитектор"]
    );
}

#[test]
fn filters_by_each_field_family() {
    assert_eq!(
        run("Навыки: SQL, Rust", "", "", ""),
        vec!["Программист", "Архитектор"]
    );
    assert_eq!(run("Оклад: 75000", "", "", ""), vec!["Программист"]);
    assert_eq!(
        run("Идентификатор валюты оклада: Рубли", "", "", ""),
        vec!["Программист", "Стажер"]
    );
    assert_eq!(
        run("Дата публикации вакансии: 31.12.2020", "", "", ""),
        vec!["Архитектор"]
    );
    assert_eq!(
        run("Премиум-вакансия: Да", "", "", ""),
        vec!["Аналитик", "Архитектор"]
    );
    assert_eq!(
        run("Опыт работы: Нет опыта", "", "", ""),
        vec!["Стажер"]
    );
    assert_eq!(run("Компания: Банк", "", "", ""), vec!["Аналитик", "Архитектор"]);
}

#[test]
fn salary_bounds_are_inclusive() {
    assert_eq!(run("Оклад: 70000", "", "", ""), vec!["Программист"]);
    assert_eq!(run("Оклад: 80000", "", "", ""), vec!["Программист"]);
}

#[test]
fn salary_just_outside_bounds_matches_nothing() {
    assert_eq!(filter_error("Оклад: 69999"), VacancyError::EmptyFilterResult);
    assert_eq!(filter_error("Оклад: 80001"), VacancyError::EmptyFilterResult);
}

#[test]
fn skills_filter_needs_every_skill() {
    assert_eq!(run("Навыки: Rust, SQL", "", "", "").len(), 2);
    assert_eq!(
        filter_error("Навыки: Rust, Excel"),
        VacancyError::EmptyFilterResult
    );
}

#[test]
fn filter_matching_nothing_fails() {
    assert_eq!(
        filter_error("Название региона: Питер"),
        VacancyError::EmptyFilterResult
    );
}

#[test]
fn unknown_table_values_match_nothing() {
    for filter in [
        "Опыт работы: Вечность",
        "Премиум-вакансия: Может",
        "Идентификатор валюты оклада: Фунты",
        "Идентификатор валюты оклада: RUR",
    ] {
        assert_eq!(
            filter_error(filter),
            VacancyError::EmptyFilterResult,
            "{filter}"
        );
    }
}

#[test]
fn date_sort_compares_instants_across_offsets() {
    let csv = format!(
        "{HEADER}\n\
         Поздняя,Текст,Git,noExperience,False,Контора,1,2,False,RUR,Москва,2022-07-05T23:30:00+0000\n\
         Ранняя,Текст,Git,noExperience,False,Контора,1,2,False,RUR,Москва,2022-07-06T02:00:00+0300\n"
    );
    let criterion = SortCriterion::parse("Дата публикации вакансии", false).unwrap();
    let names: Vec<String> = sort_vacancies(load(&csv), criterion)
        .into_iter()
        .map(|v| v.name)
        .collect();
    assert_eq!(names, vec!["Ранняя", "Поздняя"]);
}

#[test]
fn salary_sort_handles_largest_amounts() {
    let csv = format!(
        "{HEADER}\n\
         Большая,Текст,Git,noExperience,False,Контора,9e18,9e18,False,RUR,Москва,2022-07-05T10:00:00+0300\n\
         Малая,Текст,Git,noExperience,False,Контора,100,200,False,RUR,Москва,2022-07-05T10:00:00+0300\n"
    );
    let criterion = SortCriterion::parse("Оклад", false).unwrap();
    let names: Vec<String> = sort_vacancies(load(&csv), criterion)
        .into_iter()
        .map(|v| v.name)
        .collect();
    assert_eq!(names, vec!["Малая", "Большая"]);

    let too_large = format!(
        "{HEADER}\n\
         Огромная,Текст,Git,noExperience,False,Контора,1e19,1e19,False,RUR,Москва,2022-07-05T10:00:00+0300\n"
    );
    let table = parse_csv_table(too_large.as_bytes(), Path::new("corpus.csv")).unwrap();
    assert!(matches!(
        normalize_table(&table),
        Err(VacancyError::InvalidNumber { .. })
    ));
}

#[test]
fn sorts_by_typed_keys() {
    assert_eq!(
        run("", "Оклад", "Да", ""),
        vec!["Аналитик", "Архитектор", "Программист", "Стажер"]
    );
    assert_eq!(
        run("", "Навыки", "", ""),
        vec!["Стажер", "Программист", "Аналитик", "Архитектор"]
    );
    assert_eq!(
        run("", "Дата публикации вакансии", "Нет", ""),
        vec!["Архитектор", "Стажер", "Аналитик", "Программист"]
    );
    assert_eq!(
        run("", "Опыт работы", "Да", ""),
        vec!["Архитектор", "Аналитик", "Программист", "Стажер"]
    );
    assert_eq!(
        run("", "Название", "", ""),
        vec!["Аналитик", "Архитектор", "Программист", "Стажер"]
    );
}

#[test]
fn descending_sort_keeps_ties_in_input_order() {
    assert_eq!(
        run("", "Компания", "", ""),
        vec!["Аналитик", "Архитектор", "Программист", "Стажер"]
    );
    assert_eq!(
        run("", "Компания", "Да", ""),
        vec!["Программист", "Стажер", "Аналитик", "Архитектор"]
    );
}

#[test]
fn range_is_applied_after_numbering() {
    let query = TableQuery::parse(&QueryInput {
        sort: "Оклад".to_string(),
        reverse: "Да".to_string(),
        range: "2 3".to_string(),
        columns: "Оклад, Название".to_string(),
        ..QueryInput::default()
    })
    .unwrap();
    let view = prepare_table(vacancies(), &query).unwrap();

    assert_eq!(view.columns, vec![Field::Name, Field::Salary]);
    let rendered: Vec<String> = view
        .rows
        .iter()
        .map(|row| format!("{} | {}", row.number, row.cells(&view.columns).join(" | ")))
        .collect();
    insta::assert_snapshot!(rendered.join("\n"), @r"
    2 | Архитектор | 3 000 - 4 000 (Доллары) (Без вычета налогов)
    3 | Программист | 70 000 - 80 000 (Рубли) (Без вычета налогов)
    ");
}

#[test]
fn invalid_queries_fail_before_output() {
    let bad = [
        QueryInput {
            sort: "Зарплата".to_string(),
            ..QueryInput::default()
        },
        QueryInput {
            reverse: "Может быть".to_string(),
            ..QueryInput::default()
        },
        QueryInput {
            columns: "Название, Город".to_string(),
            ..QueryInput::default()
        },
        QueryInput {
            range: "один".to_string(),
            ..QueryInput::default()
        },
        QueryInput {
            filter: "Оклад 100".to_string(),
            ..QueryInput::default()
        },
    ];
    for input in &bad {
        assert!(TableQuery::parse(input).is_err(), "{input:?} should fail");
    }
}
