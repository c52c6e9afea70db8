pub const BASE_FUNDING_VERBS: [&str; 13] = [
    "支持", "奖励", "扶持", "征集", "入库", "奖补", "遴选", "补贴", "评选", "认定", "贴息支持",
    "补助", "资助",
];

pub const SPECIFIC_RECOGNITION_VERBS: [&str; 4] = ["认定", "贴息支持", "补助", "资助"];

pub const DEFAULT_VERB: &str = "支持";

pub const REDUNDANT_PHRASES: [&str; 13] = [
    "申报工作",
    "遴选工作",
    "评选工作",
    "兑现申请",
    "申请工作",
    "实施工作",
    "开展工作",
    "进行工作",
    "举办工作",
    "入选项目库",
    "入选库",
    "资金",
    "若干政策申报",
];

pub const RECOGNITION_KEYWORDS: [&str; 21] = [
    "基地",
    "合作区",
    "园区",
    "车间",
    "研究中心",
    "实验室",
    "工厂",
    "标杆",
    "孵化器",
    "载体",
    "企业",
    "品牌",
    "技能大师",
    "工作室",
    "工作站",
    "案例",
    "家庭农场",
    "合作社",
    "技能大师工作室",
    "概念中心",
    "机构",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CyclableVerbs {
    verbs: Vec<&'static str>,
}

impl CyclableVerbs {
    pub fn new() -> Self {
        let mut verbs = Vec::<&'static str>::new();
        for verb in SPECIFIC_RECOGNITION_VERBS.iter().chain(BASE_FUNDING_VERBS.iter()) {
            if !verbs.contains(verb) {
                verbs.push(*verb);
            }
        }
        verbs.sort_by_key(|verb| std::cmp::Reverse(verb.chars().count()));
        Self { verbs }
    }

    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    pub fn get(&self, index: usize) -> &'static str {
        self.verbs[index % self.verbs.len()]
    }

    pub fn position(&self, verb: &str) -> Option<usize> {
        self.verbs.iter().position(|candidate| *candidate == verb)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.position(word).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.verbs.iter().copied()
    }

    pub fn detect(&self, text: &str) -> Option<&'static str> {
        self.iter().find(|verb| text.contains(*verb))
    }
}

impl Default for CyclableVerbs {
    fn default() -> Self {
        Self::new()
    }
}
