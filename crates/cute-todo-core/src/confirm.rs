use std::collections::VecDeque;

/// Blocking yes/no prompt shown before destructive bulk operations.
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> bool;
}

/// Scripted answers, recording every prompt it was shown. Once the script
/// runs out it keeps answering with `fallback`.
#[derive(Debug, Clone, Default)]
pub struct FixedConfirm {
    answers: VecDeque<bool>,
    fallback: bool,
    pub prompts: Vec<String>,
}

impl FixedConfirm {
    pub fn always(answer: bool) -> Self {
        Self {
            answers: VecDeque::new(),
            fallback: answer,
            prompts: vec![],
        }
    }

    pub fn scripted(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            fallback: false,
            prompts: vec![],
        }
    }
}

impl Confirm for FixedConfirm {
    fn confirm(&mut self, message: &str) -> bool {
        self.prompts.push(message.to_string());
        self.answers.pop_front().unwrap_or(self.fallback)
    }
}
