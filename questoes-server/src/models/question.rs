//! Question entity and the payloads that create or patch it
//!
//! Presence rules follow JSON truthiness: a field that is absent, `null`,
//! `false`, `""` or numeric zero counts as not supplied.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;
use sqlx::FromRow;

use super::ValidationError;

/// Primary key of the `questoes` table (`SERIAL`)
pub type QuestionId = i32;

/// A row of the `questoes` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: QuestionId,
    pub enunciado: String,
    pub disciplina: String,
    pub tema: String,
    pub nivel: String,
}

/// Validated input for inserting a question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub enunciado: String,
    pub disciplina: String,
    pub tema: String,
    pub nivel: String,
}

/// Fields to overwrite on update. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionPatch {
    pub enunciado: Option<String>,
    pub disciplina: Option<String>,
    pub tema: Option<String>,
    pub nivel: Option<String>,
}

impl QuestionPatch {
    /// Merge the patch over an existing row.
    pub fn apply_to(self, current: &Question) -> Question {
        Question {
            id: current.id,
            enunciado: self.enunciado.unwrap_or_else(|| current.enunciado.clone()),
            disciplina: self.disciplina.unwrap_or_else(|| current.disciplina.clone()),
            tema: self.tema.unwrap_or_else(|| current.tema.clone()),
            nivel: self.nivel.unwrap_or_else(|| current.nivel.clone()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.enunciado.is_none()
            && self.disciplina.is_none()
            && self.tema.is_none()
            && self.nivel.is_none()
    }
}

/// JSON body accepted by `POST /questoes` and `PUT /questoes/{id}`
///
/// Every field takes any JSON scalar; truthy values are kept as text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionPayload {
    #[serde(default, deserialize_with = "truthy")]
    pub enunciado: Option<String>,

    #[serde(default, deserialize_with = "truthy")]
    pub disciplina: Option<String>,

    #[serde(default, deserialize_with = "truthy")]
    pub tema: Option<String>,

    /// Opaque level, usually a string or a number
    #[serde(default, deserialize_with = "truthy")]
    pub nivel: Option<String>,
}

impl QuestionPayload {
    /// Require all four fields for an insert.
    pub fn into_new(self) -> Result<NewQuestion, ValidationError> {
        match (self.enunciado, self.disciplina, self.tema, self.nivel) {
            (Some(enunciado), Some(disciplina), Some(tema), Some(nivel)) => Ok(NewQuestion {
                enunciado,
                disciplina,
                tema,
                nivel,
            }),
            (enunciado, disciplina, tema, nivel) => {
                let fields = [
                    ("enunciado", enunciado.is_none()),
                    ("disciplina", disciplina.is_none()),
                    ("tema", tema.is_none()),
                    ("nivel", nivel.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, missing)| missing.then_some(name))
                .collect();

                Err(ValidationError::MissingFields { fields })
            }
        }
    }

    /// Any subset of fields is a valid patch.
    pub fn into_patch(self) -> QuestionPatch {
        QuestionPatch {
            enunciado: self.enunciado,
            disciplina: self.disciplina,
            tema: self.tema,
            nivel: self.nivel,
        }
    }
}

fn truthy<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match JsonValue::deserialize(deserializer)? {
        JsonValue::Null | JsonValue::Bool(false) => Ok(None),
        JsonValue::Bool(true) => Ok(Some("true".to_string())),
        JsonValue::String(s) => Ok(Some(s).filter(|s| !s.is_empty())),
        JsonValue::Number(n) if n.as_f64() == Some(0.0) => Ok(None),
        JsonValue::Number(n) => Ok(Some(n.to_string())),
        other => Err(D::Error::custom(format!(
            "expected a string or a number, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(json: &str) -> QuestionPayload {
        serde_json::from_str(json).expect("payload should parse")
    }

    fn sample() -> Question {
        Question {
            id: 7,
            enunciado: "2+2?".into(),
            disciplina: "Math".into(),
            tema: "Arithmetic".into(),
            nivel: "easy".into(),
        }
    }

    #[test]
    fn full_payload_becomes_new_question() {
        let new = payload(
            r#"{"enunciado":"2+2?","disciplina":"Math","tema":"Arithmetic","nivel":"easy"}"#,
        )
        .into_new()
        .unwrap();

        assert_eq!(new.enunciado, "2+2?");
        assert_eq!(new.disciplina, "Math");
        assert_eq!(new.tema, "Arithmetic");
        assert_eq!(new.nivel, "easy");
    }

    #[test]
    fn numeric_nivel_is_kept_as_text() {
        let new = payload(r#"{"enunciado":"a","disciplina":"b","tema":"c","nivel":3}"#)
            .into_new()
            .unwrap();
        assert_eq!(new.nivel, "3");
    }

    #[test]
    fn missing_field_is_reported() {
        let err = payload(r#"{"enunciado":"a","disciplina":"b","nivel":"easy"}"#)
            .into_new()
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingFields {
                fields: vec!["tema"]
            }
        );
    }

    #[test]
    fn falsy_values_count_as_missing() {
        let err = payload(r#"{"enunciado":"","disciplina":null,"tema":"c","nivel":0}"#)
            .into_new()
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingFields {
                fields: vec!["enunciado", "disciplina", "nivel"]
            }
        );
    }

    #[test]
    fn empty_object_misses_everything() {
        let err = payload("{}").into_new().unwrap_err();
        assert!(matches!(err, ValidationError::MissingFields { fields } if fields.len() == 4));
    }

    #[test]
    fn false_and_zero_are_missing_in_every_field() {
        let err = payload(r#"{"enunciado":0,"disciplina":false,"tema":0.0,"nivel":false}"#)
            .into_new()
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingFields {
                fields: vec!["enunciado", "disciplina", "tema", "nivel"]
            }
        );
    }

    #[test]
    fn truthy_scalars_become_text() {
        let new = payload(r#"{"enunciado":42,"disciplina":true,"tema":"c","nivel":1.5}"#)
            .into_new()
            .unwrap();
        assert_eq!(new.enunciado, "42");
        assert_eq!(new.disciplina, "true");
        assert_eq!(new.nivel, "1.5");
    }

    #[test]
    fn rejects_structured_values() {
        for json in [r#"{"nivel":["hard"]}"#, r#"{"tema":{"nome":"x"}}"#] {
            let result: Result<QuestionPayload, _> = serde_json::from_str(json);
            assert!(result.is_err(), "{json}");
        }
    }

    #[test]
    fn patch_overwrites_only_supplied_fields() {
        let merged = payload(r#"{"nivel":"hard"}"#).into_patch().apply_to(&sample());

        assert_eq!(merged.id, 7);
        assert_eq!(merged.enunciado, "2+2?");
        assert_eq!(merged.disciplina, "Math");
        assert_eq!(merged.tema, "Arithmetic");
        assert_eq!(merged.nivel, "hard");
    }

    #[test]
    fn falsy_patch_fields_keep_old_values() {
        let patch = payload(r#"{"tema":false,"enunciado":0,"nivel":"hard"}"#).into_patch();
        let merged = patch.apply_to(&sample());

        assert_eq!(merged.tema, "Arithmetic");
        assert_eq!(merged.enunciado, "2+2?");
        assert_eq!(merged.nivel, "hard");
    }

    #[test]
    fn empty_string_in_patch_keeps_old_value() {
        let patch = payload(r#"{"tema":""}"#).into_patch();
        assert!(patch.is_empty());
        assert_eq!(patch.apply_to(&sample()), sample());
    }
}
