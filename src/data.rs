// src/data.rs

use crate::error::CatalogError;
use crate::model::{ANSWERS_PER_LEVEL, FormulaEntry, Level, Topic};
use std::collections::HashSet;

const LEVELS_YAML: &str = include_str!("data/levels.yaml");
const FORMULAS_YAML: &str = include_str!("data/formulas.yaml");

/// Datos inmutables del juego: niveles en orden y chuleta de fórmulas
#[derive(Debug, Clone)]
pub struct Catalog {
    pub levels: Vec<Level>,
    pub formulas: Vec<FormulaEntry>,
}

impl Catalog {
    /// Carga el banco embebido en el binario
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_yaml(LEVELS_YAML, FORMULAS_YAML)
    }

    pub fn from_yaml(levels_yaml: &str, formulas_yaml: &str) -> Result<Self, CatalogError> {
        let levels = read_levels(levels_yaml)?;
        let formulas: Vec<FormulaEntry> =
            serde_yaml::from_str(formulas_yaml).map_err(|source| CatalogError::Parse {
                source_name: "formulas.yaml",
                source,
            })?;
        log::debug!(
            "Catálogo cargado: {} niveles, {} fórmulas",
            levels.len(),
            formulas.len()
        );
        Ok(Self { levels, formulas })
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn level(&self, idx: usize) -> Option<&Level> {
        self.levels.get(idx)
    }

    pub fn last_index(&self) -> usize {
        self.levels.len().saturating_sub(1)
    }

    pub fn formulas_for(&self, topic: Topic) -> impl Iterator<Item = &FormulaEntry> {
        self.formulas.iter().filter(move |f| f.topic == topic)
    }
}

fn read_levels(yaml: &str) -> Result<Vec<Level>, CatalogError> {
    let levels: Vec<Level> = serde_yaml::from_str(yaml).map_err(|source| CatalogError::Parse {
        source_name: "levels.yaml",
        source,
    })?;
    validate_levels(&levels)?;
    Ok(levels)
}

fn validate_levels(levels: &[Level]) -> Result<(), CatalogError> {
    if levels.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut seen = HashSet::new();
    for level in levels {
        if !seen.insert(level.id) {
            return Err(CatalogError::DuplicateLevelId(level.id));
        }
        if level.answers.len() != ANSWERS_PER_LEVEL {
            return Err(CatalogError::AnswerCount {
                level_id: level.id,
                found: level.answers.len(),
                expected: ANSWERS_PER_LEVEL,
            });
        }
        if level.correct_answer >= level.answers.len() {
            return Err(CatalogError::CorrectAnswerOutOfBounds {
                level_id: level.id,
                index: level.correct_answer,
                len: level.answers.len(),
            });
        }
    }
    Ok(())
}
