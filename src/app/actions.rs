use super::*;
use crate::session::Step;

impl QuestApp {
    /// Aplica una transición y encola sus notificaciones
    fn apply(&mut self, transition: impl FnOnce(Session, &Catalog) -> Step) {
        let session = std::mem::take(&mut self.session);
        let step = transition(session, &self.catalog);
        self.session = step.session;
        for notification in step.notifications {
            self.toasts.push(notification);
        }
    }

    pub fn select_answer(&mut self, index: usize) {
        if self.session.revealed {
            log::warn!("Respuesta {index} ignorada: el intento ya está evaluado");
        } else {
            log::debug!("Respuesta seleccionada: {index}");
        }
        self.apply(|s, c| s.select_answer(c, index));
    }

    pub fn check_answer(&mut self) {
        let was_revealed = self.session.revealed;
        self.apply(|s, c| s.check(c));
        if was_revealed || !self.session.revealed {
            log::warn!("Comprobación ignorada: sin respuesta o intento ya evaluado");
            return;
        }
        match self.session.last_check_correct(&self.catalog) {
            Some(true) => log::info!(
                "Nivel {} correcto: puntos={} racha={}",
                self.session.current_level + 1,
                self.session.score,
                self.session.streak
            ),
            Some(false) => log::info!("Nivel {} incorrecto", self.session.current_level + 1),
            None => {}
        }
    }

    pub fn next_level(&mut self) {
        let before = self.session.current_level;
        self.apply(|s, c| s.next_level(c));
        if self.session.current_level != before {
            log::info!("Avanzando al nivel {}", self.session.current_level + 1);
        }
    }

    pub fn retry_level(&mut self) {
        log::debug!("Reintentando nivel {}", self.session.current_level + 1);
        self.apply(|s, _| s.retry());
    }

    pub fn open_formulas(&mut self) {
        self.show_formulas = true;
    }

    pub fn close_formulas(&mut self) {
        self.show_formulas = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AchievementId;

    fn app() -> QuestApp {
        QuestApp::with_catalog(Catalog::embedded().expect("catálogo válido"))
    }

    #[test]
    fn correct_check_queues_success_and_unlock_toasts() {
        let mut app = app();
        app.select_answer(0);
        app.check_answer();
        assert_eq!(app.session.score, 10);
        assert!(app.session.is_unlocked(AchievementId::FirstStep));
        // éxito + primer paso + perfeccionista
        assert_eq!(app.toasts.len(), 3);
    }

    #[test]
    fn check_without_selection_queues_nothing() {
        let mut app = app();
        app.check_answer();
        assert_eq!(app.toasts.len(), 0);
        assert_eq!(app.session, Session::default());
    }

    #[test]
    fn check_after_reveal_queues_nothing_more() {
        let mut app = app();
        app.select_answer(0);
        app.check_answer();
        let before = app.session.clone();
        app.check_answer();
        assert_eq!(app.toasts.len(), 3);
        assert_eq!(app.session, before);
    }

    #[test]
    fn formulas_overlay_does_not_touch_session() {
        let mut app = app();
        app.select_answer(1);
        let before = app.session.clone();
        app.open_formulas();
        assert!(app.show_formulas);
        app.close_formulas();
        assert!(!app.show_formulas);
        assert_eq!(app.session, before);
    }

    #[test]
    fn retry_then_next_moves_forward_clean() {
        let mut app = app();
        app.select_answer(3);
        app.check_answer();
        app.retry_level();
        assert!(!app.session.revealed);
        app.next_level();
        assert_eq!(app.session.current_level, 1);
        assert_eq!(app.session.selected_answer, None);
    }
}
