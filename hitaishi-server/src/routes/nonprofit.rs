use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use super::common::Envelope;
use crate::db::repos::{
    AdultSide, CommonProfile, Dashboard, DonorSide, ManagerSide, MemberListing, MemberType,
    NewMember, NonprofitRepo, RoleProfile, StudentSide, TrainerSide,
};
use crate::{
    ApiError, AppState, ValidationError, email, hash_password, one_of, optional, password,
    required, verify_password,
};

const GENDERS: [&str; 3] = ["Male", "Female", "Other"];
const EDUCATION_LEVELS: [&str; 3] = ["Illiterate", "Primary", "Secondary"];

#[derive(Debug, Default, Deserialize)]
pub struct MemberRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
    pub user_type: Option<String>,
    pub aadhaar_number: Option<String>,
    pub address_line1: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub district: Option<String>,
    pub mandal: Option<String>,
    pub village: Option<String>,
}

fn member_type(field: &'static str, value: Option<String>) -> Result<MemberType, ValidationError> {
    let value = required(field, value)?;
    MemberType::parse(&value).ok_or_else(|| ValidationError::Invalid {
        field,
        reason: format!("'{}' is not one of {}", value, MemberType::ALL.join(", ")),
    })
}

/// Twelve digits; spaces between groups are dropped.
fn aadhaar(value: Option<String>) -> Result<String, ValidationError> {
    let digits: String = required("aadhaar_number", value)?
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    if digits.len() == 12 && digits.chars().all(|c| c.is_ascii_digit()) {
        Ok(digits)
    } else {
        Err(ValidationError::Invalid {
            field: "aadhaar_number",
            reason: "must be 12 digits".to_owned(),
        })
    }
}

impl MemberRequest {
    /// Everything but the password, which is hashed by the caller.
    fn into_member(self, password_hash: String) -> Result<NewMember, ValidationError> {
        Ok(NewMember {
            name: required("name", self.name)?,
            email: email("email", self.email)?,
            password_hash,
            phone: optional(self.phone),
            member_type: member_type("user_type", self.user_type)?,
            aadhaar_number: aadhaar(self.aadhaar_number)?,
            address_line1: required("address_line1", self.address_line1)?,
            zip_code: required("zip_code", self.zip_code)?,
            country: required("country", self.country)?,
            state: required("state", self.state)?,
            district: required("district", self.district)?,
            mandal: optional(self.mandal),
            village: required("village", self.village)?,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberCreated {
    pub user_id: u64,
}

/// POST /api/npregister
async fn register(
    State(state): State<AppState>,
    Json(mut req): Json<MemberRequest>,
) -> Result<Json<Envelope<MemberCreated>>, ApiError> {
    let password = password("password", req.password.take())?;
    let member = req.into_member(hash_password(&password)?)?;

    let user_id = NonprofitRepo::new(state.pool()).register(&member).await?;
    info!(
        "Registered {} member {} ({})",
        member.member_type.as_str(),
        user_id,
        member.email
    );

    Ok(Envelope::with_message(
        "Registration successful",
        MemberCreated { user_id },
    ))
}

/// Form numbers arrive as JSON numbers or as numeric strings.
fn whole_number(field: &'static str, value: Option<&Value>) -> Result<Option<i64>, ValidationError> {
    let invalid = |v: &Value| ValidationError::Invalid {
        field,
        reason: format!("expected a whole number, got {v}"),
    };

    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(v @ Value::Number(n)) => n.as_i64().map(Some).ok_or_else(|| invalid(v)),
        Some(v @ Value::String(s)) => s.trim().parse().map(Some).map_err(|_| invalid(v)),
        Some(v) => Err(invalid(v)),
    }
}

fn text(data: &Value, field: &str) -> Option<String> {
    optional(data.get(field).and_then(Value::as_str).map(str::to_owned))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteProfileRequest {
    pub user_type: Option<String>,
    #[serde(default)]
    pub data: Value,
}

#[derive(Debug)]
struct ProfileCompletion {
    user_id: u64,
    common: CommonProfile,
    profile: RoleProfile,
}

impl CompleteProfileRequest {
    fn into_completion(self) -> Result<ProfileCompletion, ValidationError> {
        let kind = member_type("userType", self.user_type)?;
        let data = &self.data;

        let user_id = whole_number("userId", data.get("userId"))?
            .ok_or(ValidationError::Missing { field: "userId" })?;
        let user_id = u64::try_from(user_id).map_err(|_| ValidationError::Invalid {
            field: "userId",
            reason: format!("expected a member id, got {user_id}"),
        })?;

        let age = whole_number("age", data.get("age"))?
            .ok_or(ValidationError::Missing { field: "age" })?;
        let age = u32::try_from(age)
            .ok()
            .filter(|age| *age > 0)
            .ok_or(ValidationError::Invalid {
                field: "age",
                reason: format!("must be greater than zero, got {age}"),
            })?;

        let common = CommonProfile {
            gender: text(data, "gender")
                .map(|g| one_of("gender", g, &GENDERS))
                .transpose()?,
            profile_image: text(data, "profile_image"),
            age,
        };

        let profile = match kind {
            MemberType::Trainer => RoleProfile::Trainer(TrainerSide {
                skills: text(data, "skills"),
                experience: text(data, "experience"),
                certifications: text(data, "certifications"),
            }),
            MemberType::Manager => RoleProfile::Manager(ManagerSide {
                organization_name: text(data, "organization_name"),
                role: text(data, "role"),
                programs_managed: text(data, "programs_managed"),
            }),
            MemberType::Donor => RoleProfile::Donor(DonorSide {
                donation_preference: text(data, "donation_preference"),
                cause_program: text(data, "cause_program"),
            }),
            MemberType::Student => RoleProfile::Student(StudentSide {
                education: text(data, "education"),
                skills: text(data, "skills"),
            }),
            MemberType::Adult => {
                let monthly_income = whole_number("monthly_income", data.get("monthly_income"))?
                    .map(|income| {
                        i32::try_from(income).ok().filter(|i| *i >= 0).ok_or(
                            ValidationError::Invalid {
                                field: "monthly_income",
                                reason: format!("out of range: {income}"),
                            },
                        )
                    })
                    .transpose()?;

                RoleProfile::Adult(AdultSide {
                    occupation: text(data, "occupation"),
                    interests: text(data, "interests"),
                    monthly_income,
                    education_level: text(data, "education_level")
                        .map(|l| one_of("education_level", l, &EDUCATION_LEVELS))
                        .transpose()?,
                })
            }
        };

        Ok(ProfileCompletion {
            user_id,
            common,
            profile,
        })
    }
}

/// POST /api/npcomplete-profile
async fn complete_profile(
    State(state): State<AppState>,
    Json(req): Json<CompleteProfileRequest>,
) -> Result<Json<Envelope<()>>, ApiError> {
    let completion = req.into_completion()?;

    NonprofitRepo::new(state.pool())
        .complete_profile(completion.user_id, &completion.common, &completion.profile)
        .await?;
    info!(
        "Member {} completed a {} profile",
        completion.user_id,
        completion.profile.member_type().as_str()
    );

    Ok(Envelope::message("Profile completed successfully"))
}

#[derive(Debug, Deserialize)]
pub struct MemberLoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MemberSession {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub user_type: String,
    pub profile_complete: bool,
}

/// POST /api/nplogin
async fn login(
    State(state): State<AppState>,
    Json(req): Json<MemberLoginRequest>,
) -> Result<Json<Envelope<MemberSession>>, ApiError> {
    let email = required("email", req.email)?;
    let password = required("password", req.password)?;

    let member = NonprofitRepo::new(state.pool())
        .credentials(&email)
        .await?
        .filter(|m| verify_password(&password, &m.password_hash))
        .ok_or_else(|| ApiError::Unauthorized {
            message: "invalid email or password".to_owned(),
        })?;
    info!("Member {} logged in", member.id);

    Ok(Envelope::with_message(
        "Login successful",
        MemberSession {
            id: member.id,
            name: member.name,
            email: member.email,
            user_type: member.user_type,
            profile_complete: member.profile_complete,
        },
    ))
}

/// GET /api/npget-user-dashboard/{user_id}/{user_type}
async fn dashboard(
    State(state): State<AppState>,
    Path((user_id, user_type)): Path<(u64, String)>,
) -> Result<Json<Envelope<Dashboard>>, ApiError> {
    let kind = member_type("user_type", Some(user_type))?;
    let dashboard = NonprofitRepo::new(state.pool())
        .dashboard(user_id, kind)
        .await?;
    Ok(Envelope::data(dashboard))
}

/// GET /api/npget-all-users
async fn list_members(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<MemberListing>>>, ApiError> {
    let members = NonprofitRepo::new(state.pool()).list().await?;
    Ok(Envelope::data(members))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/npregister", post(register))
        .route("/npcomplete-profile", post(complete_profile))
        .route("/nplogin", post(login))
        .route(
            "/npget-user-dashboard/{user_id}/{user_type}",
            get(dashboard),
        )
        .route("/npget-all-users", get(list_members))
}
