// src/common/start_year.rs

use chrono::{Datelike, Utc};

use crate::common::error::AppError;

// O formulário oferece "Before 2000" como opção; internamente isso vira 1999.
pub const BEFORE_2000_SENTINEL: i32 = 1999;
pub const BEFORE_2000_LABEL: &str = "Before 2000";

pub fn current_year() -> i32 {
    Utc::now().year()
}

// Converte o texto do formulário ("2006" ou "Before 2000") no ano inteiro.
// Ano futuro ou texto irreconhecível é violação de regra de negócio, não
// erro de campo: aborta o update inteiro com a faixa válida na mensagem.
pub fn parse_start_year(input: &str, current_year: i32) -> Result<i32, AppError> {
    let trimmed = input.trim();

    if trimmed.eq_ignore_ascii_case(BEFORE_2000_LABEL) {
        return Ok(BEFORE_2000_SENTINEL);
    }

    match trimmed.parse::<i32>() {
        Ok(year) if (2000..=current_year).contains(&year) => Ok(year),
        _ => Err(AppError::InvalidStartYear(format!(
            "start year must be within 2000-{current_year} or Before 2000"
        ))),
    }
}

// Anos de atuação derivados do ano de início.
// O sentinela pré-2000 ganha um "+" porque o valor real é desconhecido.
pub fn years_since(start_year: Option<i32>, current_year: i32) -> Option<String> {
    let start = start_year?;
    let years = (current_year - start).max(0);

    if start == BEFORE_2000_SENTINEL {
        Some(format!("{years}+"))
    } else {
        Some(years.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_year_within_range() {
        assert_eq!(parse_start_year("2006", 2024).unwrap(), 2006);
        assert_eq!(parse_start_year("2000", 2024).unwrap(), 2000);
        assert_eq!(parse_start_year("2024", 2024).unwrap(), 2024);
    }

    #[test]
    fn test_before_2000_maps_to_sentinel() {
        assert_eq!(parse_start_year("Before 2000", 2024).unwrap(), 1999);
        // O formulário pode mandar com caixa diferente
        assert_eq!(parse_start_year("before 2000", 2024).unwrap(), 1999);
    }

    #[test]
    fn test_future_year_is_a_business_rule_violation() {
        let err = parse_start_year("2026", 2024).unwrap_err();
        match err {
            AppError::InvalidStartYear(msg) => {
                assert!(msg.contains("2000-2024 or Before 2000"), "msg: {msg}");
            }
            other => panic!("esperava InvalidStartYear, veio {other:?}"),
        }
    }

    #[test]
    fn test_pre_2000_literal_year_rejected() {
        // Só o rótulo "Before 2000" representa anos antigos
        assert!(parse_start_year("1987", 2024).is_err());
        assert!(parse_start_year("piscina", 2024).is_err());
    }

    #[test]
    fn test_years_since_plain() {
        assert_eq!(years_since(Some(2006), 2026).as_deref(), Some("20"));
    }

    #[test]
    fn test_years_since_sentinel_gets_plus_suffix() {
        assert_eq!(years_since(Some(1999), 2026).as_deref(), Some("27+"));
    }

    #[test]
    fn test_years_since_none_stays_none() {
        assert_eq!(years_since(None, 2026), None);
    }
}
