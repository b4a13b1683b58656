use super::*;

impl QuestApp {
    pub fn score_board(&self) -> ScoreBoard {
        ScoreBoard {
            score: self.session.score,
            completed: self.session.completed.len(),
            total: self.catalog.len(),
            streak: self.session.streak,
            percent: self.progress_percent(),
        }
    }

    pub fn answer_rows(&self) -> Vec<AnswerRow> {
        let Some(level) = self.current_level() else {
            return Vec::new();
        };
        let revealed = self.session.revealed;
        level
            .answers
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let selected = self.session.selected_answer == Some(i);
                let mark = if revealed && level.is_correct(i) {
                    AnswerMark::Correct
                } else if revealed && selected {
                    AnswerMark::Wrong
                } else {
                    AnswerMark::None
                };
                AnswerRow {
                    index: i,
                    letter: (b'A' + i as u8) as char,
                    text: text.clone(),
                    selected,
                    mark,
                    enabled: !revealed,
                }
            })
            .collect()
    }

    pub fn level_rows(&self) -> Vec<LevelRow> {
        self.catalog
            .levels
            .iter()
            .enumerate()
            .map(|(i, lvl)| LevelRow {
                idx: i,
                title: lvl.title.clone(),
                completed: self.session.completed.contains(&i),
                current: self.session.current_level == i,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> QuestApp {
        QuestApp::with_catalog(Catalog::embedded().expect("catálogo válido"))
    }

    #[test]
    fn answers_are_lettered_and_unmarked_before_reveal() {
        let mut app = app();
        app.select_answer(2);
        let rows = app.answer_rows();
        let letters: String = rows.iter().map(|r| r.letter).collect();
        assert_eq!(letters, "ABCD");
        assert!(rows.iter().all(|r| r.mark == AnswerMark::None && r.enabled));
        assert!(rows[2].selected);
        assert_eq!(rows[0].label(), "A. 20 см²");
    }

    #[test]
    fn reveal_marks_correct_and_wrong_choice() {
        let mut app = app();
        app.select_answer(1);
        app.check_answer();
        let rows = app.answer_rows();
        assert_eq!(rows[0].mark, AnswerMark::Correct);
        assert_eq!(rows[1].mark, AnswerMark::Wrong);
        assert_eq!(rows[2].mark, AnswerMark::None);
        assert!(rows.iter().all(|r| !r.enabled));
    }

    #[test]
    fn score_board_and_level_rows_follow_session() {
        let mut app = app();
        app.select_answer(0);
        app.check_answer();
        let board = app.score_board();
        assert_eq!(board.progress_label(), "1/6");
        assert_eq!(board.streak_label(), "1 🔥");
        assert_eq!(board.percent, 17);

        let rows = app.level_rows();
        assert_eq!(rows.len(), 6);
        assert!(rows[0].completed && rows[0].current);
        assert!(!rows[1].completed && !rows[1].current);
    }
}
