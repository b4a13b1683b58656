// src/view_models.rs

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerMark {
    None,
    Correct,
    Wrong,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerRow {
    pub index: usize,
    pub letter: char,
    pub text: String,
    pub selected: bool,
    pub mark: AnswerMark,
    pub enabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelRow {
    pub idx: usize,
    pub title: String,
    pub completed: bool,
    pub current: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreBoard {
    pub score: u32,
    pub completed: usize,
    pub total: usize,
    pub streak: u32,
    pub percent: u32,
}

impl AnswerRow {
    pub fn label(&self) -> String {
        match self.mark {
            AnswerMark::Correct => format!("{}. {}  ✔", self.letter, self.text),
            AnswerMark::Wrong => format!("{}. {}  ✖", self.letter, self.text),
            AnswerMark::None => format!("{}. {}", self.letter, self.text),
        }
    }
}

impl LevelRow {
    pub fn label(&self) -> String {
        let mark = if self.completed { "✅" } else { "⭕" };
        if self.current {
            format!("{mark} {} ◀", self.title)
        } else {
            format!("{mark} {}", self.title)
        }
    }
}

impl ScoreBoard {
    pub fn progress_label(&self) -> String {
        format!("{}/{}", self.completed, self.total)
    }

    pub fn streak_label(&self) -> String {
        format!("{} 🔥", self.streak)
    }
}
