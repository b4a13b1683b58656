use serde::{Deserialize, Serialize};

/// Número fijo de respuestas candidatas por nivel
pub const ANSWERS_PER_LEVEL: usize = 4;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Puntos que otorga una respuesta correcta
    pub fn points(self) -> u32 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 20,
            Difficulty::Hard => 30,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Легко",
            Difficulty::Medium => "Средне",
            Difficulty::Hard => "Сложно",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Triangles,
    Angles,
}

impl Topic {
    pub const ALL: [Topic; 2] = [Topic::Triangles, Topic::Angles];

    pub fn label(self) -> &'static str {
        match self {
            Topic::Triangles => "Треугольники",
            Topic::Angles => "Углы",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Level {
    pub id: u32,
    pub title: String,
    pub topic: Topic,
    pub question: String,
    pub answers: Vec<String>,
    pub correct_answer: usize,
    pub explanation: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub formula: Option<String>,
}

impl Level {
    pub fn is_correct(&self, answer: usize) -> bool {
        answer == self.correct_answer
    }
}

/// Entrada de la chuleta de fórmulas
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FormulaEntry {
    pub topic: Topic,
    pub title: String,
    pub formula: String,
    pub note: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum AchievementId {
    FirstStep,
    ThreeInARow,
    Perfectionist,
    GeometryMaster,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Achievement {
    pub id: AchievementId,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub unlocked: bool,
}

/// Definiciones de logros, en el orden en que se evalúan
pub static ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: AchievementId::FirstStep,
        title: "Первый шаг",
        description: "Решил первую задачу",
        icon: "⭐",
        unlocked: false,
    },
    Achievement {
        id: AchievementId::ThreeInARow,
        title: "Троечник",
        description: "Решил 3 задачи подряд",
        icon: "🏅",
        unlocked: false,
    },
    Achievement {
        id: AchievementId::Perfectionist,
        title: "Перфекционист",
        description: "Решил задачу с первого раза",
        icon: "🏆",
        unlocked: false,
    },
    Achievement {
        id: AchievementId::GeometryMaster,
        title: "Мастер геометрии",
        description: "Прошел все уровни",
        icon: "👑",
        unlocked: false,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
    Achievement,
}

/// Mensaje efímero (toast) emitido por una transición de la sesión
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: Option<String>,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            description: Some(description.into()),
        }
    }

    pub fn failure(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Failure,
            title: title.into(),
            description: Some(description.into()),
        }
    }

    pub fn achievement(achievement: &Achievement) -> Self {
        Self {
            kind: NotificationKind::Achievement,
            title: format!("🏆 Достижение разблокировано: {}!", achievement.title),
            description: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_points_are_ten_twenty_thirty() {
        assert_eq!(Difficulty::Easy.points(), 10);
        assert_eq!(Difficulty::Medium.points(), 20);
        assert_eq!(Difficulty::Hard.points(), 30);
    }

    #[test]
    fn achievements_start_locked_in_evaluation_order() {
        let ids: Vec<_> = ACHIEVEMENTS.iter().map(|a| a.id).collect();
        assert_eq!(
            ids,
            vec![
                AchievementId::FirstStep,
                AchievementId::ThreeInARow,
                AchievementId::Perfectionist,
                AchievementId::GeometryMaster,
            ]
        );
        assert!(ACHIEVEMENTS.iter().all(|a| !a.unlocked));
    }

    #[test]
    fn achievement_notification_names_the_badge() {
        let n = Notification::achievement(&ACHIEVEMENTS[1]);
        assert_eq!(n.kind, NotificationKind::Achievement);
        assert_eq!(n.title, "🏆 Достижение разблокировано: Троечник!");
        assert!(n.description.is_none());
    }
}
