use axum::extract::{DefaultBodyLimit, Multipart, Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use super::common::Envelope;
use crate::db::repos::{NewUser, ProfileUpdate, UserDetails, UserProfile, UserRepo};
use crate::upload::{MultipartForm, base_name};
use crate::{
    ApiError, AppState, ValidationError, email, hash_password, optional, optional_date, password,
    required, verify_password,
};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    pub fullname: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub course: Option<String>,
    pub password: Option<String>,
    pub dob: Option<String>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub certificates: Option<String>,
    pub resume: Option<String>,
    pub profile_image: Option<String>,
    #[serde(default)]
    pub skills: Vec<Value>,
    #[serde(default)]
    pub languages: Vec<Value>,
    #[serde(default)]
    pub education: Vec<Value>,
    #[serde(default)]
    pub jobs: Vec<Value>,
    pub extra_course: Option<String>,
}

impl UserRequest {
    fn details(&mut self) -> Result<UserDetails, ValidationError> {
        Ok(UserDetails {
            dob: optional_date("dob", self.dob.take())?,
            gender: optional(self.gender.take()),
            address: optional(self.address.take()),
            certificates: optional(self.certificates.take()),
            resume: optional(self.resume.take()),
            profile_image: optional(self.profile_image.take()),
            skills: std::mem::take(&mut self.skills),
            languages: std::mem::take(&mut self.languages),
            education: std::mem::take(&mut self.education),
            jobs: std::mem::take(&mut self.jobs),
            extra_course: optional(self.extra_course.take()),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, serde::Serialize)]
pub struct Registered {
    pub id: String,
}

/// POST /api/register
async fn register(
    State(state): State<AppState>,
    Json(mut req): Json<UserRequest>,
) -> Result<Json<Envelope<Registered>>, ApiError> {
    let fullname = required("fullname", req.fullname.take())?;
    let email = email("email", req.email.take())?;
    let phone = required("phone", req.phone.take())?;
    let course = required("course", req.course.take())?;
    let password = password("password", req.password.take())?;

    let user = NewUser {
        id: Uuid::new_v4().to_string(),
        fullname,
        email,
        phone,
        course,
        password_hash: hash_password(&password)?,
        details: req.details()?,
    };

    UserRepo::new(state.pool()).create(&user).await?;
    info!("Registered user {} ({})", user.id, user.email);

    Ok(Envelope::with_message(
        "Registration successful!",
        Registered { id: user.id },
    ))
}

/// POST /api/login
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<Envelope<UserProfile>>, ApiError> {
    let email = required("email", req.email)?;
    let password = required("password", req.password)?;

    let repo = UserRepo::new(state.pool());
    let verified = repo
        .password_hash(&email)
        .await?
        .is_some_and(|hash| verify_password(&password, &hash));
    if !verified {
        return Err(ApiError::Unauthorized {
            message: "invalid email or password".to_owned(),
        });
    }

    let profile = repo.get_by_email(&email).await?;
    info!("User {} logged in", profile.id);
    Ok(Envelope::with_message("Login successful", profile))
}

/// GET /api/profile/{email}
async fn get_profile(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Envelope<UserProfile>>, ApiError> {
    let profile = UserRepo::new(state.pool()).get_by_email(&email).await?;
    Ok(Envelope::data(profile))
}

/// A list field of the profile form: a JSON array, or comma-separated text.
fn form_list(field: &'static str, value: Option<String>) -> Result<Vec<Value>, ValidationError> {
    let Some(raw) = optional(value) else {
        return Ok(Vec::new());
    };

    if raw.starts_with('[') {
        return serde_json::from_str(&raw).map_err(|e| ValidationError::Invalid {
            field,
            reason: format!("expected a JSON list: {e}"),
        });
    }

    Ok(raw
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(Value::from)
        .collect())
}

/// Text fields of the profile form. Files are handled by the caller.
fn profile_update(form: &mut MultipartForm) -> Result<ProfileUpdate, ValidationError> {
    Ok(ProfileUpdate {
        fullname: required("fullname", form.text("fullname"))?,
        phone: required("phone", form.text("phone"))?,
        course: required("course", form.text("course"))?,
        details: UserDetails {
            dob: optional_date("dob", form.text("dob"))?,
            gender: optional(form.text("gender")),
            address: optional(form.text("address")),
            certificates: optional(form.text("certificates")),
            resume: kept_file(form.text("existingResume")),
            profile_image: kept_file(form.text("existingProfileImage")),
            skills: form_list("skills", form.text("skills"))?,
            languages: form_list("languages", form.text("languages"))?,
            education: form_list("education", form.text("education"))?,
            jobs: form_list("jobs", form.text("jobs"))?,
            extra_course: optional(form.text("extraCourse")),
        },
    })
}

/// Previously stored file echoed back by the form; only its name is kept.
fn kept_file(value: Option<String>) -> Option<String> {
    optional(value).and_then(|path| base_name(&path).map(str::to_owned))
}

/// PUT /api/profile/{email} (multipart)
async fn update_profile(
    State(state): State<AppState>,
    Path(email): Path<String>,
    multipart: Multipart,
) -> Result<Json<Envelope<()>>, ApiError> {
    let mut form = MultipartForm::read(multipart, state.uploads().max_bytes()).await?;
    let mut update = profile_update(&mut form)?;

    if let Some(image) = form.file("profileImage") {
        update.details.profile_image = Some(state.uploads().save(&image).await?.stored_name);
    }
    if let Some(resume) = form.file("resume") {
        update.details.resume = Some(state.uploads().save(&resume).await?.stored_name);
    }

    UserRepo::new(state.pool())
        .update_profile(&email, &update)
        .await?;

    Ok(Envelope::message("Profile updated successfully"))
}

pub fn router(upload_limit: usize) -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route(
            "/profile/{email}",
            get(get_profile)
                .put(update_profile)
                .layer(DefaultBodyLimit::max(upload_limit)),
        )
}
