//! Estado de la partida y sus transiciones.
//!
//! Cada acción del usuario consume la `Session` y devuelve un `Step` con la
//! sesión nueva y los toasts a mostrar. Nada de esto toca egui, así que se
//! puede probar sin ventana.

use crate::data::Catalog;
use crate::model::{ACHIEVEMENTS, Achievement, AchievementId, Notification};
use std::collections::BTreeSet;

pub const CORRECT_TITLE: &str = "Правильно! 🎉";
pub const WRONG_TITLE: &str = "Неправильно 😢";
pub const RETRY_PROMPT: &str = "Попробуй еще раз или посмотри подсказку!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub current_level: usize,
    pub selected_answer: Option<usize>,
    pub revealed: bool,
    pub score: u32,
    pub streak: u32,
    pub completed: BTreeSet<usize>,
    /// Niveles que ya se han comprobado al menos una vez (acierto o fallo)
    pub attempted: BTreeSet<usize>,
    pub achievements: Vec<Achievement>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            current_level: 0,
            selected_answer: None,
            revealed: false,
            score: 0,
            streak: 0,
            completed: BTreeSet::new(),
            attempted: BTreeSet::new(),
            achievements: ACHIEVEMENTS.to_vec(),
        }
    }
}

/// Resultado de una transición
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub session: Session,
    pub notifications: Vec<Notification>,
}

impl Step {
    fn quiet(session: Session) -> Self {
        Self {
            session,
            notifications: Vec::new(),
        }
    }
}

impl Session {
    pub fn select_answer(mut self, catalog: &Catalog, index: usize) -> Step {
        if self.revealed {
            return Step::quiet(self);
        }
        let in_bounds = catalog
            .level(self.current_level)
            .is_some_and(|l| index < l.answers.len());
        if in_bounds {
            self.selected_answer = Some(index);
        }
        Step::quiet(self)
    }

    pub fn check(mut self, catalog: &Catalog) -> Step {
        if self.revealed {
            return Step::quiet(self);
        }
        let Some(selected) = self.selected_answer else {
            return Step::quiet(self);
        };
        let Some(level) = catalog.level(self.current_level) else {
            return Step::quiet(self);
        };

        let idx = self.current_level;
        let first_attempt = self.attempted.insert(idx);
        self.revealed = true;

        if !level.is_correct(selected) {
            self.streak = 0;
            return Step {
                session: self,
                notifications: vec![Notification::failure(WRONG_TITLE, RETRY_PROMPT)],
            };
        }

        // conteo previo a la inserción; repetir un nivel ya hecho también cuenta
        let completed_before = self.completed.len();
        self.score += level.difficulty.points();
        self.streak += 1;
        self.completed.insert(idx);

        let mut notifications = vec![Notification::success(
            CORRECT_TITLE,
            level.explanation.clone(),
        )];

        // Orden fijo: primer paso, racha, perfeccionista, maestro
        let rules = [
            (AchievementId::FirstStep, completed_before == 0),
            (AchievementId::ThreeInARow, self.streak >= 3),
            (AchievementId::Perfectionist, first_attempt),
            (
                AchievementId::GeometryMaster,
                completed_before + 1 == catalog.len(),
            ),
        ];
        for (id, earned) in rules {
            if earned {
                notifications.extend(self.unlock(id));
            }
        }

        Step {
            session: self,
            notifications,
        }
    }

    pub fn next_level(mut self, catalog: &Catalog) -> Step {
        if self.current_level < catalog.last_index() {
            self.current_level += 1;
            self.selected_answer = None;
            self.revealed = false;
        }
        Step::quiet(self)
    }

    pub fn retry(mut self) -> Step {
        self.selected_answer = None;
        self.revealed = false;
        Step::quiet(self)
    }

    fn unlock(&mut self, id: AchievementId) -> Option<Notification> {
        let achievement = self.achievements.iter_mut().find(|a| a.id == id)?;
        if achievement.unlocked {
            return None;
        }
        achievement.unlocked = true;
        log::info!("Logro desbloqueado: {:?}", id);
        Some(Notification::achievement(achievement))
    }

    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.achievements.iter().any(|a| a.id == id && a.unlocked)
    }

    pub fn is_last_level(&self, catalog: &Catalog) -> bool {
        self.current_level >= catalog.last_index()
    }

    /// `Some(true/false)` tras comprobar, `None` mientras no se ha revelado
    pub fn last_check_correct(&self, catalog: &Catalog) -> Option<bool> {
        if !self.revealed {
            return None;
        }
        let level = catalog.level(self.current_level)?;
        self.selected_answer.map(|s| level.is_correct(s))
    }
}
