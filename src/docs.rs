// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register_customer,
        handlers::auth::register_dealer,
        handlers::auth::register_expert,
        handlers::auth::login,
        handlers::auth::change_password,
        handlers::auth::get_me,

        // --- Customers ---
        handlers::customers::get_me,
        handlers::customers::update_me,
        handlers::customers::delete_me,

        // --- Dealers ---
        handlers::dealers::get_me,
        handlers::dealers::update_me,

        // --- Experts ---
        handlers::experts::get_me,
        handlers::experts::update_me,
    ),
    components(
        schemas(
            // --- Auth ---
            models::account::AccountRole,
            models::account::Account,
            models::account::CustomerRegistrationPayload,
            models::account::DealerRegistrationPayload,
            models::account::ExpertRegistrationPayload,
            models::account::LoginPayload,
            models::account::ChangePasswordPayload,
            models::account::AuthResponse,

            // --- Onboarding ---
            models::onboarding::CustomerOnboardingStep,
            models::onboarding::DealerOnboardingStep,
            models::onboarding::ExpertOnboardingStep,
            models::onboarding::ValidationCode,
            models::onboarding::FieldError,

            // --- Customers ---
            models::customer::AddressKind,
            models::customer::Address,
            models::customer::AddressPayload,
            models::customer::CustomerProfile,
            models::customer::UpdateCustomerProfilePayload,
            models::customer::CustomerProfileResponse,

            // --- Dealers ---
            models::dealer::BusinessLocation,
            models::dealer::LocationPayload,
            models::dealer::DealerProfile,
            models::dealer::UpdateDealerProfilePayload,
            models::dealer::DealerProfileResponse,

            // --- Experts ---
            models::expert::ExpertProfile,
            models::expert::UpdateExpertProfilePayload,
            models::expert::ExpertProfileResponse,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação, Registro e Senha"),
        (name = "Customers", description = "Perfil e Onboarding do Cliente"),
        (name = "Dealers", description = "Perfil e Onboarding da Empresa"),
        (name = "Experts", description = "Perfil e Onboarding do Especialista")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
