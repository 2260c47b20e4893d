//! Perspective synthesis: one interpretation block per non-empty bucket.

use std::collections::BTreeSet;

use mizan_core::models::{Interpretation, SourceGroup, SourceType};

/// Citation cap per perspective block.
const MAX_KEY_SOURCES: usize = 3;

/// Synthesize interpretations in fixed bucket order. All buckets empty
/// yields exactly one fallback block.
pub fn synthesize(groups: &[SourceGroup]) -> Vec<Interpretation> {
    let mut interpretations: Vec<Interpretation> =
        groups.iter().map(from_group).collect();

    if interpretations.is_empty() {
        interpretations.push(Interpretation {
            perspective: "Общее замечание".into(),
            description: "По данной ситуации не найдено высокорелевантных источников. \
                 Рекомендуется консультация со специалистом."
                .into(),
            key_sources: vec![],
            note: "База знаний может быть расширена для покрытия большего числа тем.".into(),
        });
    }
    interpretations
}

fn from_group(group: &SourceGroup) -> Interpretation {
    let key_sources: Vec<String> = group
        .items
        .iter()
        .take(MAX_KEY_SOURCES)
        .map(|item| item.reference.clone())
        .collect();
    let count = group.items.len();

    match group.source_type {
        SourceType::Scripture => Interpretation {
            perspective: "Коранический взгляд".into(),
            description: format!(
                "По данной ситуации найдено {count} релевантных аятов Корана. \
                 Тексты Корана призывают к размышлению и осознанному выбору, \
                 подчёркивая важность справедливости, милосердия и ответственности."
            ),
            key_sources,
            note: "Интерпретация аятов может различаться в зависимости от контекста \
                 и школы тафсира."
                .into(),
        },
        SourceType::Tradition => Interpretation {
            perspective: "Пророческая традиция (Сунна)".into(),
            description: format!(
                "Найдено {count} релевантных хадисов. Пророческая традиция \
                 предоставляет практические примеры нравственного поведения \
                 и этических решений."
            ),
            key_sources,
            note: "Каждый хадис имеет степень достоверности и контекст передачи.".into(),
        },
        SourceType::Principle => {
            let traditions = named_traditions(group);
            let positions = if traditions.is_empty() {
                "общей этики".to_string()
            } else {
                traditions.into_iter().collect::<Vec<_>>().join(", ")
            };
            Interpretation {
                perspective: "Философско-этический взгляд".into(),
                description: format!(
                    "Ситуация рассматривается с позиций: {positions}. \
                     Различные этические традиции могут давать разные рекомендации."
                ),
                key_sources,
                note: "Философские принципы дополняют, но не заменяют религиозные источники."
                    .into(),
            }
        }
    }
}

/// Collect named ethical traditions from principle titles by splitting on
/// the first colon. The set is ordered for deterministic output.
fn named_traditions(group: &SourceGroup) -> BTreeSet<String> {
    group
        .items
        .iter()
        .filter_map(|item| {
            item.title
                .split_once(':')
                .map(|(prefix, _)| prefix.trim().to_string())
        })
        .collect()
}
