//! Sistema de tratamento de erros
//!
//! Este módulo define os tipos de erro da aplicação e a conversão
//! de cada um para a resposta HTTP apropriada.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Erros principais da aplicação
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid state: {0}")]
    EstadoInvalido(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Resposta de erro da API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

/// Violações de integridade viram conflito em vez de erro interno:
/// 23503 = chave estrangeira (registro com vínculos), 23505 = unicidade.
fn status_para_codigo_sql(codigo: &str) -> Option<(StatusCode, &'static str)> {
    match codigo {
        "23503" => Some((StatusCode::CONFLICT, "Violação de integridade referencial")),
        "23505" => Some((StatusCode::CONFLICT, "Registro duplicado")),
        _ => None,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Database(e) => {
                let violacao = e
                    .as_database_error()
                    .and_then(|db| db.code())
                    .and_then(|code| status_para_codigo_sql(&code));

                match violacao {
                    Some((status, mensagem)) => {
                        tracing::warn!("Violação de integridade: {}", e);
                        (
                            status,
                            ErrorResponse {
                                error: "Conflict".to_string(),
                                message: mensagem.to_string(),
                                details: None,
                            },
                        )
                    }
                    None => {
                        tracing::error!("Erro de banco de dados: {}", e);
                        (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            ErrorResponse {
                                error: "Database Error".to_string(),
                                message: "Ocorreu um erro ao acessar o banco de dados".to_string(),
                                details: None,
                            },
                        )
                    }
                }
            }

            AppError::Validation(e) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "Validation Error".to_string(),
                    message: "Os dados enviados são inválidos".to_string(),
                    details: Some(json!(e)),
                },
            ),

            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "Bad Request".to_string(),
                    message: msg,
                    details: None,
                },
            ),

            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error: "Not Found".to_string(),
                    message: msg,
                    details: None,
                },
            ),

            AppError::Conflict(msg) => (
                StatusCode::CONFLICT,
                ErrorResponse {
                    error: "Conflict".to_string(),
                    message: msg,
                    details: None,
                },
            ),

            AppError::EstadoInvalido(msg) => (
                StatusCode::CONFLICT,
                ErrorResponse {
                    error: "Invalid State".to_string(),
                    message: msg,
                    details: None,
                },
            ),

            AppError::Internal(msg) => {
                tracing::error!("Erro interno: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal Server Error".to_string(),
                        message: "Ocorreu um erro inesperado".to_string(),
                        details: None,
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_vira_404() {
        let response = AppError::NotFound("Veículo não encontrado".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn bad_request_vira_400() {
        let response = AppError::BadRequest("meses inválido".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn conflito_e_estado_invalido_viram_409() {
        let conflito = AppError::Conflict("Veículo já está em viagem".to_string()).into_response();
        assert_eq!(conflito.status(), StatusCode::CONFLICT);

        let estado =
            AppError::EstadoInvalido("Viagem não está em andamento".to_string()).into_response();
        assert_eq!(estado.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn violacao_de_integridade_vira_conflito() {
        assert_eq!(
            status_para_codigo_sql("23503").map(|(s, _)| s),
            Some(StatusCode::CONFLICT)
        );
        assert_eq!(
            status_para_codigo_sql("23505").map(|(s, _)| s),
            Some(StatusCode::CONFLICT)
        );
        assert_eq!(status_para_codigo_sql("42P01"), None);
    }
}
