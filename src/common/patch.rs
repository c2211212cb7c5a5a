// src/common/patch.rs

// Regras da atualização parcial.
//
// Strings só sobrescrevem quando vêm preenchidas: `""` é tratado como "não enviado".
// Com isso não dá para limpar um campo via PUT, e isso é assumido.

use serde::{Deserialize, Deserializer};

// Campo opcional que não aceita `null`: ausente vira `None` (com `#[serde(default)]`),
// `null` é rejeitado pelo extrator antes de chegar no handler.
pub fn reject_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

pub fn overwrite_if_filled(field: &mut String, value: Option<String>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        *field = value;
    }
}

// Listas trocam inteiras sempre que vierem, mesmo vazias.
pub fn replace_if_present<T>(field: &mut Vec<T>, value: Option<Vec<T>>) {
    if let Some(value) = value {
        *field = value;
    }
}
