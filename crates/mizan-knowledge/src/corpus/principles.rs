//! Ethical-principle entries. Titles are formatted "Традиция: Принцип"; the
//! interpreter uses the colon prefix to name the traditions it drew from.

use mizan_core::models::{KnowledgeEntry, SourceType};

fn principle(id: &str, title: &str, content: &str, tags: &[&str], reference: &str) -> KnowledgeEntry {
    KnowledgeEntry {
        id: id.into(),
        source_type: SourceType::Principle,
        title: title.into(),
        content: content.into(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        reference: reference.into(),
        original_language_text: None,
        authenticity_grade: None,
    }
}

pub fn entries() -> Vec<KnowledgeEntry> {
    vec![
        principle(
            "principle-001",
            "Деонтология: Категорический императив",
            "Поступай только согласно такой максиме, руководствуясь которой ты в то же время можешь пожелать, чтобы она стала всеобщим законом. Долг и правило важнее выгоды.",
            &["долг", "правило", "обязанность", "универсальность", "принцип"],
            "И. Кант, «Основы метафизики нравственности»",
        ),
        principle(
            "principle-002",
            "Деонтология: Запрет лжи",
            "Ложь недопустима даже из благих побуждений, поскольку обман разрушает доверие между людьми и достоинство самого лжеца.",
            &["ложь", "обман", "честность", "правда", "доверие"],
            "И. Кант, «О мнимом праве лгать из человеколюбия»",
        ),
        principle(
            "principle-003",
            "Утилитаризм: Принцип наибольшего счастья",
            "Правильно то действие, которое приносит наибольшее благо наибольшему числу людей. Последствия поступка важнее намерений.",
            &["последствия", "благо", "польза", "счастье", "вред"],
            "Дж. С. Милль, «Утилитаризм»",
        ),
        principle(
            "principle-004",
            "Утилитаризм: Минимизация вреда",
            "При выборе между действиями следует предпочесть то, которое причиняет наименьший вред всем затронутым сторонам, включая отдалённые последствия.",
            &["вред", "выбор", "последствия", "пострадает", "защита"],
            "Дж. Бентам, «Введение в основания нравственности»",
        ),
        principle(
            "principle-005",
            "Этика добродетели: Золотая середина",
            "Добродетель есть середина между двумя крайностями. Честность лежит между грубой прямолинейностью и лживой угодливостью.",
            &["добродетель", "умеренность", "характер", "честность"],
            "Аристотель, «Никомахова этика»",
        ),
        principle(
            "principle-006",
            "Этика добродетели: Практическая мудрость",
            "Нравственное решение требует рассудительности: умения видеть обстоятельства конкретной ситуации, а не только общие правила.",
            &["мудрость", "рассудительность", "решение", "обстоятельства"],
            "Аристотель, «Никомахова этика», кн. VI",
        ),
        principle(
            "principle-007",
            "Золотое правило: Взаимность",
            "Поступай с другими так, как хочешь, чтобы поступали с тобой. Не делай другому того, чего не желаешь себе.",
            &["взаимность", "справедливость", "отношения", "сочувствие"],
            "Общечеловеческий принцип взаимности",
        ),
        principle(
            "principle-008",
            "Этика заботы: Ответственность за близких",
            "Моральная жизнь строится на отношениях заботы. Интересы семьи и зависимых от нас людей накладывают особые обязательства.",
            &["забота", "семья", "близкие", "ответственность", "отношения"],
            "К. Гиллиган, «Иным голосом»",
        ),
        principle(
            "principle-009",
            "Контрактуализм: Справедливость как честность",
            "Справедливы те правила, которые приняли бы свободные и равные люди, не зная заранее своего положения в обществе.",
            &["справедливость", "равенство", "правила", "общество"],
            "Дж. Ролз, «Теория справедливости»",
        ),
        principle(
            "principle-010",
            "Этика ответственности: Дальние последствия",
            "Поступай так, чтобы последствия твоих действий были совместимы с сохранением подлинной человеческой жизни и в будущем.",
            &["ответственность", "последствия", "будущее", "сохранение"],
            "Г. Йонас, «Принцип ответственности»",
        ),
    ]
}
