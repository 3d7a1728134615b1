// src/services/validation.rs

// A engine de validação condicionada por etapa. Em vez de um builder
// fluente com variável capturada, as regras são uma LISTA ORDENADA
// explícita de pares (predicado, checagem), avaliadas ansiosamente contra
// um snapshot imutável de códigos; quem monta o snapshot é o orquestrador,
// uma vez por chamada.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    models::customer::UpdateCustomerProfilePayload,
    models::dealer::UpdateDealerProfilePayload,
    models::expert::UpdateExpertProfilePayload,
    models::onboarding::{
        CustomerOnboardingStep, DealerOnboardingStep, ExpertOnboardingStep, FieldError,
        ValidationCode,
    },
    services::catalog::{CheckOutcome, LookupCategory, LookupSnapshot},
};

// --- A ENGINE ---

// Uma regra: `applies` decide se ela vale para esta requisição (gate de
// etapa ou incondicional); `check` devolve no máximo UMA falha de campo.
pub struct Rule<P> {
    pub applies: fn(&P) -> bool,
    pub check: fn(&P, &LookupSnapshot) -> Option<FieldError>,
}

// Roda a lista inteira e coleta TODAS as falhas, nunca para na primeira,
// para o cliente corrigir tudo numa viagem só.
pub fn run_rules<P>(rules: &[Rule<P>], payload: &P, lookups: &LookupSnapshot) -> Vec<FieldError> {
    rules
        .iter()
        .filter(|rule| (rule.applies)(payload))
        .filter_map(|rule| (rule.check)(payload, lookups))
        .collect()
}

// --- HELPERS DE FORMA ---

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9 ().\-]{7,20}$").expect("regex de telefone"));

static ZIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}(-\d{4})?$").expect("regex de CEP americano"));

// Host permissivo: rótulos alfanuméricos separados por ponto, terminando
// num TLD alfabético de 2+ letras.
static WEBSITE_HOST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$")
        .expect("regex de host")
});

// Website permissivo: esquema opcional, "www." opcional, caminho opcional.
// "pentair.com" passa; "www.pentair" (sem TLD) não.
pub fn is_valid_website(input: &str) -> bool {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return false;
    }

    let rest = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed);

    let host = rest.split('/').next().unwrap_or("");
    // O "www." não conta como domínio registrável
    let host = host.strip_prefix("www.").unwrap_or(host);

    WEBSITE_HOST_RE.is_match(host)
}

pub fn is_valid_phone(input: &str) -> bool {
    PHONE_RE.is_match(input.trim())
}

pub fn is_valid_zip(input: &str) -> bool {
    ZIP_RE.is_match(input.trim())
}

fn require_text(value: Option<&str>, field: &str) -> Option<FieldError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => None,
        _ => Some(FieldError::new(field, ValidationCode::FieldRequired)),
    }
}

fn require_list<T>(value: Option<&[T]>, field: &str) -> Option<FieldError> {
    match value {
        Some(list) if !list.is_empty() => None,
        _ => Some(FieldError::new(field, ValidationCode::FieldRequired)),
    }
}

fn shape_if_present(
    value: Option<&str>,
    field: &str,
    code: ValidationCode,
    valid: fn(&str) -> bool,
) -> Option<FieldError> {
    match value {
        Some(v) if !v.trim().is_empty() && !valid(v) => Some(FieldError::new(field, code)),
        _ => None,
    }
}

fn max_len(value: Option<&str>, field: &str, max: usize) -> Option<FieldError> {
    match value {
        Some(v) if v.chars().count() > max => {
            Some(FieldError::new(field, ValidationCode::MaxLengthExceeded))
        }
        _ => None,
    }
}

// --- HELPERS DE PERTENCIMENTO ---

// Valid E Inconclusive viram "sem erro": ausência é válida e checagem
// pulada (catálogo fora) não pode reprovar ninguém.
fn check_code(
    lookups: &LookupSnapshot,
    category: LookupCategory,
    value: Option<&str>,
    field: &str,
) -> Option<FieldError> {
    match lookups.check(category, value.unwrap_or("")) {
        CheckOutcome::Invalid(_) => Some(FieldError::new(field, category.error_code())),
        CheckOutcome::Valid | CheckOutcome::Inconclusive => None,
    }
}

// Campo com lista de códigos: qualquer código desconhecido reprova o campo
// inteiro.
fn check_code_list(
    lookups: &LookupSnapshot,
    category: LookupCategory,
    values: Option<&[String]>,
    field: &str,
) -> Option<FieldError> {
    let list = values?;
    match lookups.check_all(category, list.iter().map(String::as_str)) {
        CheckOutcome::Invalid(_) => Some(FieldError::new(field, category.error_code())),
        CheckOutcome::Valid | CheckOutcome::Inconclusive => None,
    }
}

// --- REGRA DE SENHA (incondicional, entre campos) ---

pub fn password_change_errors(current_password: &str, new_password: &str) -> Vec<FieldError> {
    if new_password == current_password {
        vec![FieldError::new(
            "newPassword",
            ValidationCode::ErrorSameCurrentAndNewPassword,
        )]
    } else {
        Vec::new()
    }
}

// --- REGRAS: CUSTOMER ---

// Gates de etapa. A etapa N exige tudo que as etapas ≤ N exigiram;
// EditProfile é regime permanente (edição parcial, nada novo obrigatório).
fn customer_needs_address(p: &UpdateCustomerProfilePayload) -> bool {
    matches!(
        p.onboarding_step,
        CustomerOnboardingStep::GettingStarted | CustomerOnboardingStep::PoolDetails
    )
}

fn customer_has_pool_section(p: &UpdateCustomerProfilePayload) -> bool {
    matches!(
        p.onboarding_step,
        CustomerOnboardingStep::PoolDetails | CustomerOnboardingStep::EditProfile
    )
}

pub fn customer_rules() -> Vec<Rule<UpdateCustomerProfilePayload>> {
    vec![
        // (a) forma, incondicional: CEP de cada endereço enviado
        Rule {
            applies: |_| true,
            check: |p, _| {
                p.addresses
                    .as_deref()
                    .unwrap_or_default()
                    .iter()
                    .find(|a| !is_valid_zip(&a.zip))
                    .map(|_| FieldError::new("addresses", ValidationCode::InvalidZipCode))
            },
        },
        // (b) obrigatório a partir de GettingStarted: endereço primário
        Rule {
            applies: customer_needs_address,
            check: |p, _| {
                if p.primary_address().is_none() {
                    Some(FieldError::new("addresses", ValidationCode::FieldRequired))
                } else {
                    None
                }
            },
        },
        // (b) obrigatório em PoolDetails: tipo da piscina
        Rule {
            applies: |p| p.onboarding_step == CustomerOnboardingStep::PoolDetails,
            check: |p, _| require_text(p.pool_type.as_deref(), "poolType"),
        },
        // (c) pertencimento, por categoria de código
        Rule {
            applies: customer_has_pool_section,
            check: |p, l| check_code(l, LookupCategory::SanitationMethod, p.sanitation_method.as_deref(), "sanitationMethod"),
        },
        Rule {
            applies: customer_has_pool_section,
            check: |p, l| check_code(l, LookupCategory::PoolType, p.pool_type.as_deref(), "poolType"),
        },
        Rule {
            applies: customer_has_pool_section,
            check: |p, l| check_code(l, LookupCategory::PoolSize, p.pool_size.as_deref(), "poolSize"),
        },
        Rule {
            applies: customer_has_pool_section,
            check: |p, l| check_code(l, LookupCategory::PoolMaterial, p.pool_material.as_deref(), "poolMaterial"),
        },
        Rule {
            applies: customer_has_pool_section,
            check: |p, l| check_code(l, LookupCategory::HotTubType, p.hot_tub_type.as_deref(), "hotTubType"),
        },
        Rule {
            applies: customer_has_pool_section,
            check: |p, l| check_code(l, LookupCategory::PoolSeason, p.pool_season.as_deref(), "poolSeason"),
        },
    ]
}

// --- REGRAS: DEALER ---

fn dealer_past_signup(p: &UpdateDealerProfilePayload) -> bool {
    matches!(
        p.onboarding_step,
        DealerOnboardingStep::AboutBusiness | DealerOnboardingStep::PublicCompanyProfile
    )
}

pub fn dealer_rules() -> Vec<Rule<UpdateDealerProfilePayload>> {
    vec![
        // (a) forma, incondicional
        Rule {
            applies: |_| true,
            check: |p, _| {
                shape_if_present(
                    p.website.as_deref(),
                    "website",
                    ValidationCode::InvalidWebsiteUrl,
                    is_valid_website,
                )
            },
        },
        Rule {
            applies: |_| true,
            check: |p, _| {
                shape_if_present(
                    p.business_phone.as_deref(),
                    "businessPhone",
                    ValidationCode::InvalidPhoneFormat,
                    is_valid_phone,
                )
            },
        },
        Rule {
            applies: |_| true,
            check: |p, _| max_len(p.about.as_deref(), "about", 2000),
        },
        // (b) obrigatórios a partir de AboutBusiness
        Rule {
            applies: dealer_past_signup,
            check: |p, _| require_text(p.business_name.as_deref(), "businessName"),
        },
        Rule {
            applies: dealer_past_signup,
            check: |p, _| require_text(p.business_phone.as_deref(), "businessPhone"),
        },
        Rule {
            applies: dealer_past_signup,
            check: |p, _| require_list(p.locations.as_deref(), "locations"),
        },
        Rule {
            applies: dealer_past_signup,
            check: |p, _| {
                if p.terms_accepted == Some(true) {
                    None
                } else {
                    Some(FieldError::new("termsAccepted", ValidationCode::FieldRequired))
                }
            },
        },
        // (b) obrigatórios só no perfil público
        Rule {
            applies: |p| p.onboarding_step == DealerOnboardingStep::PublicCompanyProfile,
            check: |p, _| require_text(p.about.as_deref(), "about"),
        },
        Rule {
            applies: |p| p.onboarding_step == DealerOnboardingStep::PublicCompanyProfile,
            check: |p, _| require_text(p.start_year.as_deref(), "startYear"),
        },
        // (c) pertencimento: categorias de serviço
        Rule {
            applies: dealer_past_signup,
            check: |p, l| {
                check_code_list(l, LookupCategory::JobCategory, p.job_categories.as_deref(), "jobCategories")
            },
        },
    ]
}

// --- REGRAS: EXPERT ---

fn expert_completing(p: &UpdateExpertProfilePayload) -> bool {
    p.onboarding_step == ExpertOnboardingStep::ExpertProfileCompletion
}

pub fn expert_rules() -> Vec<Rule<UpdateExpertProfilePayload>> {
    vec![
        // (a) forma, incondicional
        Rule {
            applies: |_| true,
            check: |p, _| {
                shape_if_present(
                    p.zip_code.as_deref(),
                    "zipCode",
                    ValidationCode::InvalidZipCode,
                    is_valid_zip,
                )
            },
        },
        Rule {
            applies: |_| true,
            check: |p, _| max_len(p.about.as_deref(), "about", 2000),
        },
        // (b) obrigatórios na conclusão do perfil
        Rule {
            applies: expert_completing,
            check: |p, _| require_text(p.zip_code.as_deref(), "zipCode"),
        },
        Rule {
            applies: expert_completing,
            check: |p, _| require_list(p.languages.as_deref(), "languages"),
        },
        Rule {
            applies: expert_completing,
            check: |p, _| require_list(p.skills.as_deref(), "skills"),
        },
        // (c) pertencimento
        Rule {
            applies: expert_completing,
            check: |p, l| check_code_list(l, LookupCategory::Language, p.languages.as_deref(), "languages"),
        },
        Rule {
            applies: expert_completing,
            check: |p, l| check_code_list(l, LookupCategory::Skill, p.skills.as_deref(), "skills"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::customer::{AddressKind, AddressPayload};
    use crate::models::dealer::LocationPayload;

    // --- fixtures ---

    fn full_snapshot() -> LookupSnapshot {
        let mut s = LookupSnapshot::new();
        let owned = |codes: &[&str]| codes.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        s.insert_codes(LookupCategory::SanitationMethod, owned(&["chlorine", "salt_water"]));
        s.insert_codes(LookupCategory::PoolType, owned(&["lap_pool", "plunge_pool"]));
        s.insert_codes(LookupCategory::PoolSize, owned(&["small", "large"]));
        s.insert_codes(LookupCategory::PoolMaterial, owned(&["fiberglass", "concrete"]));
        s.insert_codes(LookupCategory::HotTubType, owned(&["in_ground"]));
        s.insert_codes(LookupCategory::PoolSeason, owned(&["year_round", "summer"]));
        s.insert_codes(LookupCategory::JobCategory, owned(&["pump_repair", "free_assessment"]));
        s.insert_codes(LookupCategory::Language, owned(&["en", "pt"]));
        s.insert_codes(LookupCategory::Skill, owned(&["motor", "pump_repair"]));
        s
    }

    fn primary_address() -> AddressPayload {
        AddressPayload {
            kind: AddressKind::Primary,
            line1: "1200 Poolside Ave".into(),
            line2: None,
            city: "Miami".into(),
            state: "FL".into(),
            zip: "33139".into(),
        }
    }

    fn customer_payload(step: CustomerOnboardingStep) -> UpdateCustomerProfilePayload {
        UpdateCustomerProfilePayload {
            onboarding_step: step,
            sanitation_method: None,
            pool_type: None,
            pool_size: None,
            pool_material: None,
            hot_tub_type: None,
            pool_season: None,
            notify_email: None,
            notify_sms: None,
            addresses: None,
        }
    }

    fn dealer_payload(step: DealerOnboardingStep) -> UpdateDealerProfilePayload {
        UpdateDealerProfilePayload {
            onboarding_step: step,
            business_name: None,
            about: None,
            website: None,
            business_phone: None,
            start_year: None,
            brands: None,
            job_categories: None,
            certifications: None,
            terms_accepted: None,
            locations: None,
        }
    }

    fn complete_dealer_about_business() -> UpdateDealerProfilePayload {
        let mut p = dealer_payload(DealerOnboardingStep::AboutBusiness);
        p.business_name = Some("Blue Lagoon Pools".into());
        p.business_phone = Some("(305) 555-0101".into());
        p.terms_accepted = Some(true);
        p.locations = Some(vec![LocationPayload {
            name: None,
            line1: "99 Ocean Dr".into(),
            city: "Miami".into(),
            state: "FL".into(),
            zip: "33139".into(),
        }]);
        p
    }

    fn expert_payload(step: ExpertOnboardingStep) -> UpdateExpertProfilePayload {
        UpdateExpertProfilePayload {
            onboarding_step: step,
            zip_code: None,
            start_year: None,
            languages: None,
            skills: None,
            about: None,
            photo_url: None,
        }
    }

    fn codes_of(errors: &[FieldError]) -> Vec<(String, ValidationCode)> {
        errors
            .iter()
            .map(|e| (e.field.clone(), e.error_code))
            .collect()
    }

    // --- campos obrigatórios por etapa ---

    #[test]
    fn test_signup_complete_step_demands_nothing() {
        let payload = customer_payload(CustomerOnboardingStep::SignUpComplete);
        let errors = run_rules(&customer_rules(), &payload, &full_snapshot());
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn test_getting_started_requires_primary_address() {
        let payload = customer_payload(CustomerOnboardingStep::GettingStarted);
        let errors = run_rules(&customer_rules(), &payload, &full_snapshot());
        assert_eq!(
            codes_of(&errors),
            vec![("addresses".to_string(), ValidationCode::FieldRequired)]
        );

        // Endereço só secundário não satisfaz
        let mut payload = customer_payload(CustomerOnboardingStep::GettingStarted);
        let mut secondary = primary_address();
        secondary.kind = AddressKind::Secondary;
        payload.addresses = Some(vec![secondary]);
        let errors = run_rules(&customer_rules(), &payload, &full_snapshot());
        assert_eq!(errors[0].field, "addresses");

        // Com o primário presente, nada falha
        let mut payload = customer_payload(CustomerOnboardingStep::GettingStarted);
        payload.addresses = Some(vec![primary_address()]);
        let errors = run_rules(&customer_rules(), &payload, &full_snapshot());
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn test_pool_details_requires_pool_type_and_earlier_steps() {
        let payload = customer_payload(CustomerOnboardingStep::PoolDetails);
        let errors = run_rules(&customer_rules(), &payload, &full_snapshot());
        let codes = codes_of(&errors);
        // Exige o endereço (etapa anterior) E o tipo da piscina
        assert!(codes.contains(&("addresses".to_string(), ValidationCode::FieldRequired)));
        assert!(codes.contains(&("poolType".to_string(), ValidationCode::FieldRequired)));

        let mut payload = customer_payload(CustomerOnboardingStep::PoolDetails);
        payload.addresses = Some(vec![primary_address()]);
        payload.pool_type = Some("lap_pool".into());
        let errors = run_rules(&customer_rules(), &payload, &full_snapshot());
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn test_edit_profile_is_partial() {
        // Regime permanente: nenhum campo novo obrigatório
        let payload = customer_payload(CustomerOnboardingStep::EditProfile);
        let errors = run_rules(&customer_rules(), &payload, &full_snapshot());
        assert!(errors.is_empty(), "{errors:?}");
    }

    // --- pertencimento de códigos ---

    #[test]
    fn test_absent_code_never_fails_membership() {
        let mut payload = customer_payload(CustomerOnboardingStep::EditProfile);
        payload.pool_material = None;
        let errors = run_rules(&customer_rules(), &payload, &full_snapshot());
        assert!(errors.is_empty());

        // String vazia conta como ausência
        payload.pool_material = Some("".into());
        let errors = run_rules(&customer_rules(), &payload, &full_snapshot());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_unknown_code_yields_category_specific_error() {
        let mut payload = customer_payload(CustomerOnboardingStep::EditProfile);
        payload.pool_material = Some("wood".into());
        let errors = run_rules(&customer_rules(), &payload, &full_snapshot());
        assert_eq!(
            codes_of(&errors),
            vec![("poolMaterial".to_string(), ValidationCode::InvalidPoolMaterialCode)]
        );
    }

    #[test]
    fn test_unknown_skill_yields_invalid_skill_code() {
        let mut payload = expert_payload(ExpertOnboardingStep::ExpertProfileCompletion);
        payload.zip_code = Some("33139".into());
        payload.languages = Some(vec!["en".into()]);
        payload.skills = Some(vec!["water chemistry".into()]);
        let errors = run_rules(&expert_rules(), &payload, &full_snapshot());
        assert_eq!(
            codes_of(&errors),
            vec![("skills".to_string(), ValidationCode::InvalidSkillCode)]
        );
    }

    #[test]
    fn test_list_field_is_all_or_nothing() {
        // Os dois válidos: passa
        let mut payload = complete_dealer_about_business();
        payload.job_categories = Some(vec!["pump_repair".into(), "free_assessment".into()]);
        let errors = run_rules(&dealer_rules(), &payload, &full_snapshot());
        assert!(errors.is_empty(), "{errors:?}");

        // Um válido + um inválido: o campo inteiro falha
        let mut payload = complete_dealer_about_business();
        payload.job_categories = Some(vec!["pump_repair".into(), "tiling".into()]);
        let errors = run_rules(&dealer_rules(), &payload, &full_snapshot());
        assert_eq!(
            codes_of(&errors),
            vec![("jobCategories".to_string(), ValidationCode::InvalidJobCategoryCode)]
        );
    }

    #[test]
    fn test_catalog_down_skips_membership_but_not_required() {
        let mut snapshot = LookupSnapshot::new();
        snapshot.insert_failed(LookupCategory::Skill);
        snapshot.insert_failed(LookupCategory::Language);

        // Código bogus passa (fail-open)...
        let mut payload = expert_payload(ExpertOnboardingStep::ExpertProfileCompletion);
        payload.zip_code = Some("33139".into());
        payload.languages = Some(vec!["klingon".into()]);
        payload.skills = Some(vec!["anything".into()]);
        let errors = run_rules(&expert_rules(), &payload, &snapshot);
        assert!(errors.is_empty(), "{errors:?}");

        // ...mas obrigatoriedade continua valendo
        let payload = expert_payload(ExpertOnboardingStep::ExpertProfileCompletion);
        let errors = run_rules(&expert_rules(), &payload, &snapshot);
        let codes = codes_of(&errors);
        assert!(codes.contains(&("zipCode".to_string(), ValidationCode::FieldRequired)));
        assert!(codes.contains(&("languages".to_string(), ValidationCode::FieldRequired)));
        assert!(codes.contains(&("skills".to_string(), ValidationCode::FieldRequired)));
    }

    // --- regras de forma ---

    #[test]
    fn test_website_accepts_bare_domains() {
        for ok in ["pentair.com", "www.pentair.com", "http://www.pentair.com",
                   "https://pentair.com/products", "sub.pentair.co"] {
            assert!(is_valid_website(ok), "{ok} deveria passar");
        }
        for bad in ["www.pentair", "pentair", "", "http://", "www."] {
            assert!(!is_valid_website(bad), "{bad} deveria falhar");
        }
    }

    #[test]
    fn test_dealer_website_rule_is_unconditional() {
        // Mesmo na etapa SignUpComplete, website torto reprova
        let mut payload = dealer_payload(DealerOnboardingStep::SignUpComplete);
        payload.website = Some("www.pentair".into());
        let errors = run_rules(&dealer_rules(), &payload, &full_snapshot());
        assert_eq!(
            codes_of(&errors),
            vec![("website".to_string(), ValidationCode::InvalidWebsiteUrl)]
        );
    }

    #[test]
    fn test_about_business_required_set() {
        let payload = dealer_payload(DealerOnboardingStep::AboutBusiness);
        let errors = run_rules(&dealer_rules(), &payload, &full_snapshot());
        let codes = codes_of(&errors);
        assert!(codes.contains(&("businessName".to_string(), ValidationCode::FieldRequired)));
        assert!(codes.contains(&("businessPhone".to_string(), ValidationCode::FieldRequired)));
        assert!(codes.contains(&("locations".to_string(), ValidationCode::FieldRequired)));
        assert!(codes.contains(&("termsAccepted".to_string(), ValidationCode::FieldRequired)));
    }

    #[test]
    fn test_public_company_profile_adds_about_and_start_year() {
        let mut payload = complete_dealer_about_business();
        payload.onboarding_step = DealerOnboardingStep::PublicCompanyProfile;
        let errors = run_rules(&dealer_rules(), &payload, &full_snapshot());
        let codes = codes_of(&errors);
        assert!(codes.contains(&("about".to_string(), ValidationCode::FieldRequired)));
        assert!(codes.contains(&("startYear".to_string(), ValidationCode::FieldRequired)));

        payload.about = Some("Cuidamos de piscinas desde 2006.".into());
        payload.start_year = Some("2006".into());
        let errors = run_rules(&dealer_rules(), &payload, &full_snapshot());
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn test_errors_are_collected_not_fail_fast() {
        let mut payload = dealer_payload(DealerOnboardingStep::AboutBusiness);
        payload.website = Some("www.pentair".into());
        let errors = run_rules(&dealer_rules(), &payload, &full_snapshot());
        // forma + todos os obrigatórios, numa resposta só
        assert!(errors.len() >= 5, "{errors:?}");
    }

    #[test]
    fn test_bad_address_zip_flags_addresses_field() {
        let mut payload = customer_payload(CustomerOnboardingStep::GettingStarted);
        let mut addr = primary_address();
        addr.zip = "3313".into();
        payload.addresses = Some(vec![addr]);
        let errors = run_rules(&customer_rules(), &payload, &full_snapshot());
        assert_eq!(
            codes_of(&errors),
            vec![("addresses".to_string(), ValidationCode::InvalidZipCode)]
        );
    }

    // --- senha ---

    #[test]
    fn test_same_password_always_fails() {
        let errors = password_change_errors("hunter22", "hunter22");
        assert_eq!(
            codes_of(&errors),
            vec![("newPassword".to_string(), ValidationCode::ErrorSameCurrentAndNewPassword)]
        );
        assert!(password_change_errors("hunter22", "hunter23").is_empty());
    }
}
