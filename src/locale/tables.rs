//! Built-in fallback keywords, one set per locale.
//!
//! All entries are lowercase; the classifier lower-cases the reply once and
//! does plain substring tests.

pub struct BuiltinKeywords {
    pub happy: &'static [&'static str],
    pub sad: &'static [&'static str],
    pub angry: &'static [&'static str],
    pub surprised: &'static [&'static str],
}

pub const EN: BuiltinKeywords = BuiltinKeywords {
    happy: &[
        "happy",
        "glad",
        "great",
        "wonderful",
        "love",
        "enjoy",
        "pleased",
        "awesome",
        "yay",
        "haha",
        "😊",
        "😄",
    ],
    sad: &[
        "sad",
        "sorry",
        "unfortunate",
        "miss you",
        "regret",
        "lonely",
        "cry",
        "😢",
        "😭",
    ],
    angry: &[
        "angry",
        "frustrat",
        "unacceptable",
        "annoy",
        "furious",
        "stop that",
        "hate",
        "😡",
    ],
    surprised: &[
        "surprise",
        "unexpected",
        "no way",
        "whoa",
        "wow",
        "really?",
        "can't believe",
        "😮",
    ],
};

pub const ZH: BuiltinKeywords = BuiltinKeywords {
    happy: &[
        "开心", "高兴", "快乐", "太好了", "哈哈", "嘻嘻", "喜欢", "太棒了", "幸福", "😊",
    ],
    sad: &[
        "难过", "伤心", "遗憾", "抱歉", "寂寞", "呜呜", "哭", "😢",
    ],
    angry: &["生气", "讨厌", "烦死了", "可恶", "气死", "别闹了", "😡"],
    surprised: &["哇", "天哪", "不会吧", "真的吗", "居然", "竟然", "没想到", "😮"],
};

pub const JA: BuiltinKeywords = BuiltinKeywords {
    happy: &[
        "嬉しい", "うれしい", "楽しい", "たのしい", "やった", "最高", "好き", "よかった", "😊",
    ],
    sad: &[
        "悲しい", "かなしい", "寂しい", "さびしい", "残念", "ごめん", "泣", "😢",
    ],
    angry: &["怒", "むかつく", "ムカつく", "許さない", "いい加減にして", "😡"],
    surprised: &["えっ", "まさか", "びっくり", "驚", "本当に", "すごい", "😮"],
};
