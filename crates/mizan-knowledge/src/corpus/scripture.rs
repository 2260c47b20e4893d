//! Scriptural verse entries (аяты Корана) with the original Arabic text.

use mizan_core::models::{KnowledgeEntry, SourceType};

fn verse(
    id: &str,
    title: &str,
    content: &str,
    tags: &[&str],
    reference: &str,
    arabic: &str,
) -> KnowledgeEntry {
    KnowledgeEntry {
        id: id.into(),
        source_type: SourceType::Scripture,
        title: title.into(),
        content: content.into(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        reference: reference.into(),
        original_language_text: Some(arabic.into()),
        authenticity_grade: None,
    }
}

pub fn entries() -> Vec<KnowledgeEntry> {
    vec![
        verse(
            "scripture-001",
            "О стойкости в справедливости",
            "О те, которые уверовали! Будьте стойки в справедливости, свидетельствуя перед Аллахом, даже если свидетельство будет против вас самих, родителей или близких родственников.",
            &["справедливость", "свидетельство", "правда", "родители", "семья"],
            "Коран, 4:135",
            "يَا أَيُّهَا الَّذِينَ آمَنُوا كُونُوا قَوَّامِينَ بِالْقِسْطِ شُهَدَاءَ لِلَّهِ",
        ),
        verse(
            "scripture-002",
            "О смешении истины с ложью",
            "Не облекайте истину в ложь и не скрывайте истину, тогда как вы знаете её.",
            &["истина", "ложь", "скрыть", "обман", "честность", "секрет"],
            "Коран, 2:42",
            "وَلَا تَلْبِسُوا الْحَقَّ بِالْبَاطِلِ وَتَكْتُمُوا الْحَقَّ وَأَنتُمْ تَعْلَمُونَ",
        ),
        verse(
            "scripture-003",
            "О справедливости и добродетели",
            "Воистину, Аллах повелевает блюсти справедливость, делать добро и одаривать родственников, и запрещает мерзости, предосудительное и бесчинство.",
            &["справедливость", "добро", "родственники", "запрет", "вред"],
            "Коран, 16:90",
            "إِنَّ اللَّهَ يَأْمُرُ بِالْعَدْلِ وَالْإِحْسَانِ وَإِيتَاءِ ذِي الْقُرْبَىٰ",
        ),
        verse(
            "scripture-004",
            "О добром отношении к родителям",
            "Твой Господь предписал вам не поклоняться никому, кроме Него, и делать добро родителям. Не говори им даже «уф» и не кричи на них, а говори им слово почтительное.",
            &["родители", "мать", "отец", "семья", "почтение", "добро"],
            "Коран, 17:23",
            "وَقَضَىٰ رَبُّكَ أَلَّا تَعْبُدُوا إِلَّا إِيَّاهُ وَبِالْوَالِدَيْنِ إِحْسَانًا",
        ),
        verse(
            "scripture-005",
            "О дурных предположениях",
            "О те, которые уверовали! Избегайте многих предположений, ибо некоторые предположения являются грехом. Не следите друг за другом и не злословьте за спиной друг друга.",
            &["предположение", "злословие", "доверие", "тайна", "сосед"],
            "Коран, 49:12",
            "يَا أَيُّهَا الَّذِينَ آمَنُوا اجْتَنِبُوا كَثِيرًا مِّنَ الظَّنِّ",
        ),
        verse(
            "scripture-006",
            "О прощении",
            "Пусть они простят и будут великодушны. Разве вы не желаете, чтобы Аллах простил вас?",
            &["прощение", "простить", "великодушие", "милосердие"],
            "Коран, 24:22",
            "وَلْيَعْفُوا وَلْيَصْفَحُوا ۗ أَلَا تُحِبُّونَ أَن يَغْفِرَ اللَّهُ لَكُمْ",
        ),
        verse(
            "scripture-007",
            "О воздаянии за зло",
            "Воздаянием за зло является равноценное зло. Но если кто простит и установит мир, то его награда будет за Аллахом.",
            &["воздаяние", "наказание", "простить", "мир", "справедливость"],
            "Коран, 42:40",
            "وَجَزَاءُ سَيِّئَةٍ سَيِّئَةٌ مِّثْلُهَا ۖ فَمَنْ عَفَا وَأَصْلَحَ فَأَجْرُهُ عَلَى اللَّهِ",
        ),
        verse(
            "scripture-008",
            "О доверенном имуществе",
            "Воистину, Аллах велит вам возвращать вверенное на хранение имущество его владельцам и судить по справедливости, когда вы судите среди людей.",
            &["доверие", "аманат", "обещание", "справедливость", "обязательство"],
            "Коран, 4:58",
            "إِنَّ اللَّهَ يَأْمُرُكُمْ أَن تُؤَدُّوا الْأَمَانَاتِ إِلَىٰ أَهْلِهَا",
        ),
        verse(
            "scripture-009",
            "О сохранении жизни",
            "Кто сохранит жизнь человеку, тот словно сохранит жизнь всем людям. Причинение вреда одной душе подобно вреду всему человечеству.",
            &["жизнь", "вред", "спасение", "человек", "пострадает"],
            "Коран, 5:32",
            "وَمَنْ أَحْيَاهَا فَكَأَنَّمَا أَحْيَا النَّاسَ جَمِيعًا",
        ),
        verse(
            "scripture-010",
            "О совете",
            "Их дела вершатся по совету между ними. Совещание с другими — путь к взвешенному решению.",
            &["совет", "шура", "решение", "выбор", "обсуждение"],
            "Коран, 42:38",
            "وَأَمْرُهُمْ شُورَىٰ بَيْنَهُمْ",
        ),
    ]
}
