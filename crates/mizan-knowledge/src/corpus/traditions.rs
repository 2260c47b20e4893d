//! Narrated-tradition entries (хадисы) with authenticity grades.

use mizan_core::models::{KnowledgeEntry, SourceType};

#[allow(clippy::too_many_arguments)]
fn hadith(
    id: &str,
    title: &str,
    content: &str,
    tags: &[&str],
    reference: &str,
    arabic: &str,
    grade: &str,
) -> KnowledgeEntry {
    KnowledgeEntry {
        id: id.into(),
        source_type: SourceType::Tradition,
        title: title.into(),
        content: content.into(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        reference: reference.into(),
        original_language_text: Some(arabic.into()),
        authenticity_grade: Some(grade.into()),
    }
}

pub fn entries() -> Vec<KnowledgeEntry> {
    vec![
        hadith(
            "tradition-001",
            "О намерениях",
            "Поистине, дела оцениваются только по намерениям, и каждому человеку достанется лишь то, что он намеревался обрести.",
            &["намерение", "мотив", "дело", "искренность"],
            "Сахих аль-Бухари, 1",
            "إِنَّمَا الأَعْمَالُ بِالنِّيَّاتِ",
            "сахих",
        ),
        hadith(
            "tradition-002",
            "О желании брату того же, что себе",
            "Не уверует никто из вас до тех пор, пока не станет желать брату своему того же, чего желает самому себе.",
            &["взаимность", "брат", "желание", "сочувствие"],
            "Сахих аль-Бухари, 13",
            "لاَ يُؤْمِنُ أَحَدُكُمْ حَتَّى يُحِبَّ لأَخِيهِ مَا يُحِبُّ لِنَفْسِهِ",
            "сахих",
        ),
        hadith(
            "tradition-003",
            "О правдивости",
            "Правдивость ведёт к благочестию, а благочестие ведёт к Раю. Ложь ведёт к греховности, и человек продолжает лгать, пока не будет записан лжецом.",
            &["правдивость", "честность", "ложь", "обман"],
            "Сахих Муслим, 2607",
            "عَلَيْكُمْ بِالصِّدْقِ فَإِنَّ الصِّدْقَ يَهْدِي إِلَى الْبِرِّ",
            "сахих",
        ),
        hadith(
            "tradition-004",
            "О сокрытии недостатков",
            "Кто скроет недостаток мусульманина, недостаток того скроет Аллах в День воскресения. Хранение чужой тайны — проявление доверия.",
            &["тайна", "секрет", "сокрытие", "доверие", "друг"],
            "Сахих Муслим, 2590",
            "وَمَنْ سَتَرَ مُسْلِمًا سَتَرَهُ اللَّهُ يَوْمَ الْقِيَامَةِ",
            "сахих",
        ),
        hadith(
            "tradition-005",
            "О недопустимости вреда",
            "Не должно быть ни причинения вреда, ни ответного вреда.",
            &["вред", "ущерб", "запрет", "навредить"],
            "Сунан Ибн Маджа, 2341",
            "لاَ ضَرَرَ وَلاَ ضِرَارَ",
            "хасан",
        ),
        hadith(
            "tradition-006",
            "О сомнительном",
            "Дозволенное очевидно и запретное очевидно, а между ними находится сомнительное. Кто остерегается сомнительного, тот сохраняет свою религию и честь.",
            &["сомнение", "сомнительное", "осторожность", "выбор"],
            "Сахих аль-Бухари, 52",
            "الْحَلاَلُ بَيِّنٌ وَالْحَرَامُ بَيِّنٌ وَبَيْنَهُمَا مُشَبَّهَاتٌ",
            "сахих",
        ),
        hadith(
            "tradition-007",
            "О гневе и сдержанности",
            "Силён не тот, кто побеждает в борьбе. Силён лишь тот, кто владеет собой в гневе.",
            &["гнев", "сдержанность", "сила", "наказание"],
            "Сахих аль-Бухари, 6114",
            "لَيْسَ الشَّدِيدُ بِالصُّرَعَةِ إِنَّمَا الشَّدِيدُ الَّذِي يَمْلِكُ نَفْسَهُ عِنْدَ الْغَضَبِ",
            "сахих",
        ),
        hadith(
            "tradition-008",
            "О совете и доверии",
            "Тот, с кем советуются, облечён доверием: он обязан указать на то, что считает благом.",
            &["совет", "доверие", "благо", "решение"],
            "Сунан Абу Дауда, 5128",
            "الْمُسْتَشَارُ مُؤْتَمَنٌ",
            "хасан",
        ),
    ]
}
