use thiserror::Error;

/// Fallos al cargar el banco embebido de niveles y fórmulas
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("no se pudo parsear el YAML de {source_name}: {source}")]
    Parse {
        source_name: &'static str,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("el banco de niveles está vacío")]
    Empty,
    #[error("el nivel {level_id} tiene {found} respuestas, se esperaban {expected}")]
    AnswerCount {
        level_id: u32,
        found: usize,
        expected: usize,
    },
    #[error("el nivel {level_id} marca la respuesta {index} como correcta, pero solo tiene {len}")]
    CorrectAnswerOutOfBounds {
        level_id: u32,
        index: usize,
        len: usize,
    },
    #[error("id de nivel duplicado: {0}")]
    DuplicateLevelId(u32),
}
