use serde::Serialize;

use super::TitleFields;
use super::verbs::CyclableVerbs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleSession {
    core_text: String,
    suffix: String,
    verb_index: Option<usize>,
    verbs: CyclableVerbs,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleOutcome {
    FixedTitle,
    Advanced,
    Exhausted,
}

impl CycleOutcome {
    pub fn advisory(self) -> &'static str {
        match self {
            Self::FixedTitle => "当前标题为固定格式，无需切换",
            Self::Advanced => "标题已重新生成",
            Self::Exhausted => "已尝试所有资助方式，如果无您想要的结果请复制结果并自行修改",
        }
    }
}

impl TitleSession {
    pub fn start(fields: &TitleFields, default_year: &str, verbs: &CyclableVerbs) -> Self {
        let verb_index = if fields.is_fixed() {
            None
        } else {
            Some(verbs.position(&fields.initial_verb).unwrap_or(0))
        };

        Self {
            core_text: fields.core_text.clone(),
            suffix: fields.suffix(default_year),
            verb_index,
            verbs: verbs.clone(),
        }
    }

    pub fn current_verb(&self) -> &'static str {
        self.verb_index
            .map(|index| self.verbs.get(index))
            .unwrap_or("")
    }

    pub fn title(&self) -> String {
        format!("{}{}{}", self.core_text, self.current_verb(), self.suffix)
    }

    pub fn cycle_verb(self) -> (Self, CycleOutcome) {
        let Some(index) = self.verb_index else {
            return (self, CycleOutcome::FixedTitle);
        };

        let next = (index + 1) % self.verbs.len();
        let outcome = if next == 0 {
            CycleOutcome::Exhausted
        } else {
            CycleOutcome::Advanced
        };

        (
            Self {
                verb_index: Some(next),
                ..self
            },
            outcome,
        )
    }
}
