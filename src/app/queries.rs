use super::*;
use crate::model::Level;

impl QuestApp {
    pub fn current_level(&self) -> Option<&Level> {
        self.catalog.level(self.session.current_level)
    }

    pub fn has_next_level(&self) -> bool {
        !self.session.is_last_level(&self.catalog)
    }

    pub fn can_check(&self) -> bool {
        self.session.selected_answer.is_some() && !self.session.revealed
    }

    /// Porcentaje de niveles completados, redondeado
    pub fn progress_percent(&self) -> u32 {
        if self.catalog.is_empty() {
            return 0;
        }
        let ratio = self.session.completed.len() as f32 / self.catalog.len() as f32;
        (ratio * 100.0).round() as u32
    }

    pub fn progress_fraction(&self) -> f32 {
        if self.catalog.is_empty() {
            return 0.0;
        }
        self.session.completed.len() as f32 / self.catalog.len() as f32
    }
}

/// Icono decorativo del nivel, rota cada tres
pub fn level_icon(idx: usize) -> &'static str {
    match idx % 3 {
        0 => "📐",
        1 => "📏",
        _ => "🔺",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_percent_rounds() {
        let mut app = QuestApp::with_catalog(Catalog::embedded().expect("catálogo válido"));
        assert_eq!(app.progress_percent(), 0);
        app.session.completed.insert(0);
        assert_eq!(app.progress_percent(), 17);
        app.session.completed.extend([1, 2]);
        assert_eq!(app.progress_percent(), 50);
    }

    #[test]
    fn level_icon_cycles() {
        assert_eq!(level_icon(0), "📐");
        assert_eq!(level_icon(1), "📏");
        assert_eq!(level_icon(2), "🔺");
        assert_eq!(level_icon(3), "📐");
    }
}
