use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, MySqlPool};

use super::DbError;

/// Role a non-profit member signs up under; each has its own profile table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberType {
    Trainer,
    Manager,
    Donor,
    Student,
    Adult,
}

impl MemberType {
    pub const ALL: [&'static str; 5] = ["Trainer", "Manager", "Donor", "Student", "Adult"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Trainer" => Some(Self::Trainer),
            "Manager" => Some(Self::Manager),
            "Donor" => Some(Self::Donor),
            "Student" => Some(Self::Student),
            "Adult" => Some(Self::Adult),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trainer => "Trainer",
            Self::Manager => "Manager",
            Self::Donor => "Donor",
            Self::Student => "Student",
            Self::Adult => "Adult",
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewMember {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub member_type: MemberType,
    pub aadhaar_number: String,
    pub address_line1: String,
    pub zip_code: String,
    pub country: String,
    pub state: String,
    pub district: String,
    pub mandal: Option<String>,
    pub village: String,
}

/// Fields every member fills in when completing a profile.
#[derive(Debug, Clone, Default)]
pub struct CommonProfile {
    pub gender: Option<String>,
    pub profile_image: Option<String>,
    pub age: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, FromRow)]
pub struct TrainerSide {
    pub skills: Option<String>,
    pub experience: Option<String>,
    pub certifications: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, FromRow)]
pub struct ManagerSide {
    pub organization_name: Option<String>,
    pub role: Option<String>,
    pub programs_managed: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, FromRow)]
pub struct DonorSide {
    pub donation_preference: Option<String>,
    pub cause_program: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, FromRow)]
pub struct StudentSide {
    pub education: Option<String>,
    /// Renamed so it cannot be mistaken for a trainer's skills on the dashboard.
    #[serde(rename = "student_skills")]
    pub skills: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, FromRow)]
pub struct AdultSide {
    pub occupation: Option<String>,
    pub interests: Option<String>,
    pub monthly_income: Option<i32>,
    pub education_level: Option<String>,
}

/// Role-specific half of a profile. Serialized flat into the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RoleProfile {
    Trainer(TrainerSide),
    Manager(ManagerSide),
    Donor(DonorSide),
    Student(StudentSide),
    Adult(AdultSide),
}

impl RoleProfile {
    pub fn member_type(&self) -> MemberType {
        match self {
            Self::Trainer(_) => MemberType::Trainer,
            Self::Manager(_) => MemberType::Manager,
            Self::Donor(_) => MemberType::Donor,
            Self::Student(_) => MemberType::Student,
            Self::Adult(_) => MemberType::Adult,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct MemberCredentials {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub user_type: String,
    pub profile_complete: bool,
    pub password_hash: String,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MemberRecord {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub user_type: String,
    pub profile_complete: bool,
    pub gender: Option<String>,
    pub profile_image: Option<String>,
    pub aadhaar_number: Option<String>,
    pub age: Option<i32>,
    pub address_line1: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub district: Option<String>,
    pub mandal: Option<String>,
    pub village: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    #[serde(flatten)]
    pub member: MemberRecord,
    /// `None` until the profile has been completed.
    #[serde(flatten)]
    pub profile: Option<RoleProfile>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MemberListing {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub user_type: String,
    pub profile_complete: bool,
    pub aadhaar_number: Option<String>,
    pub age: Option<i32>,
    pub state: Option<String>,
    pub district: Option<String>,
    pub village: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// All but the last four digits hidden, as printed on e-Aadhaar letters.
pub fn mask_aadhaar(number: &str) -> String {
    let digits = number.chars().count();
    let visible = digits.saturating_sub(4);
    number
        .chars()
        .enumerate()
        .map(|(i, c)| if i < visible { 'X' } else { c })
        .collect()
}

pub struct NonprofitRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> NonprofitRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// Fails with [`DbError::Duplicate`] when the email or Aadhaar number is taken.
    pub async fn register(&self, m: &NewMember) -> Result<u64, DbError> {
        let result = sqlx::query(
            r#"
            INSERT INTO nonprofit (
                name, email, password_hash, phone, user_type, profile_complete,
                aadhaar_number, address_line1, zip_code, country, state,
                district, mandal, village
            ) VALUES (?, ?, ?, ?, ?, FALSE, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&m.name)
        .bind(&m.email)
        .bind(&m.password_hash)
        .bind(&m.phone)
        .bind(m.member_type.as_str())
        .bind(&m.aadhaar_number)
        .bind(&m.address_line1)
        .bind(&m.zip_code)
        .bind(&m.country)
        .bind(&m.state)
        .bind(&m.district)
        .bind(&m.mandal)
        .bind(&m.village)
        .execute(self.pool)
        .await
        .map_err(DbError::on_insert("email or Aadhaar number"))?;

        Ok(result.last_insert_id())
    }

    /// Updates the shared columns and stores the role profile in one transaction.
    pub async fn complete_profile(
        &self,
        user_id: u64,
        common: &CommonProfile,
        profile: &RoleProfile,
    ) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE nonprofit
            SET gender = ?, profile_image = ?, age = ?, profile_complete = TRUE
            WHERE id = ? AND user_type = ?
            "#,
        )
        .bind(&common.gender)
        .bind(&common.profile_image)
        .bind(common.age)
        .bind(user_id)
        .bind(profile.member_type().as_str())
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("member", user_id));
        }

        let insert = match profile {
            RoleProfile::Trainer(p) => sqlx::query(
                "INSERT INTO trainer_profiles (user_id, skills, experience, certifications) VALUES (?, ?, ?, ?)",
            )
            .bind(user_id)
            .bind(&p.skills)
            .bind(&p.experience)
            .bind(&p.certifications),
            RoleProfile::Manager(p) => sqlx::query(
                "INSERT INTO manager_profiles (user_id, organization_name, role, programs_managed) VALUES (?, ?, ?, ?)",
            )
            .bind(user_id)
            .bind(&p.organization_name)
            .bind(&p.role)
            .bind(&p.programs_managed),
            RoleProfile::Donor(p) => sqlx::query(
                "INSERT INTO donor_profiles (user_id, donation_preference, cause_program) VALUES (?, ?, ?)",
            )
            .bind(user_id)
            .bind(&p.donation_preference)
            .bind(&p.cause_program),
            RoleProfile::Student(p) => {
                sqlx::query("INSERT INTO student_profiles (user_id, education, skills) VALUES (?, ?, ?)")
                    .bind(user_id)
                    .bind(&p.education)
                    .bind(&p.skills)
            }
            RoleProfile::Adult(p) => sqlx::query(
                "INSERT INTO adults_profiles (user_id, occupation, interests, monthly_income, education_level) VALUES (?, ?, ?, ?, ?)",
            )
            .bind(user_id)
            .bind(&p.occupation)
            .bind(&p.interests)
            .bind(p.monthly_income)
            .bind(&p.education_level),
        };
        insert.execute(&mut *tx).await?;

        tx.commit().await?;
        Ok(())
    }

    pub async fn credentials(&self, email: &str) -> Result<Option<MemberCredentials>, DbError> {
        let credentials = sqlx::query_as(
            r#"
            SELECT id, name, email, user_type, profile_complete, password_hash
            FROM nonprofit
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(credentials)
    }

    pub async fn dashboard(&self, user_id: u64, kind: MemberType) -> Result<Dashboard, DbError> {
        let member: MemberRecord = sqlx::query_as(
            r#"
            SELECT id, name, email, phone, user_type, profile_complete, gender,
                   profile_image, aadhaar_number, age, address_line1, zip_code,
                   country, state, district, mandal, village
            FROM nonprofit
            WHERE id = ? AND user_type = ?
            "#,
        )
        .bind(user_id)
        .bind(kind.as_str())
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("member", user_id))?;

        let profile = self.latest_profile(user_id, kind).await?;
        Ok(Dashboard { member, profile })
    }

    async fn latest_profile(
        &self,
        user_id: u64,
        kind: MemberType,
    ) -> Result<Option<RoleProfile>, DbError> {
        const LATEST: &str = "WHERE user_id = ? ORDER BY id DESC LIMIT 1";

        let profile = match kind {
            MemberType::Trainer => sqlx::query_as(&format!(
                "SELECT skills, experience, certifications FROM trainer_profiles {LATEST}"
            ))
            .bind(user_id)
            .fetch_optional(self.pool)
            .await?
            .map(RoleProfile::Trainer),
            MemberType::Manager => sqlx::query_as(&format!(
                "SELECT organization_name, role, programs_managed FROM manager_profiles {LATEST}"
            ))
            .bind(user_id)
            .fetch_optional(self.pool)
            .await?
            .map(RoleProfile::Manager),
            MemberType::Donor => sqlx::query_as(&format!(
                "SELECT donation_preference, cause_program FROM donor_profiles {LATEST}"
            ))
            .bind(user_id)
            .fetch_optional(self.pool)
            .await?
            .map(RoleProfile::Donor),
            MemberType::Student => sqlx::query_as(&format!(
                "SELECT education, skills FROM student_profiles {LATEST}"
            ))
            .bind(user_id)
            .fetch_optional(self.pool)
            .await?
            .map(RoleProfile::Student),
            MemberType::Adult => sqlx::query_as(&format!(
                "SELECT occupation, interests, monthly_income, education_level FROM adults_profiles {LATEST}"
            ))
            .bind(user_id)
            .fetch_optional(self.pool)
            .await?
            .map(RoleProfile::Adult),
        };

        Ok(profile)
    }

    /// Newest first, with Aadhaar numbers masked.
    pub async fn list(&self) -> Result<Vec<MemberListing>, DbError> {
        let members: Vec<MemberListing> = sqlx::query_as(
            r#"
            SELECT id, name, email, phone, user_type, profile_complete,
                   aadhaar_number, age, state, district, village, created_at
            FROM nonprofit
            ORDER BY id DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(members
            .into_iter()
            .map(|mut m| {
                m.aadhaar_number = m.aadhaar_number.as_deref().map(mask_aadhaar);
                m
            })
            .collect())
    }
}
