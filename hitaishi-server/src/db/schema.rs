use sqlx::MySqlPool;
use tracing::info;

const TABLES: &[(&str, &str)] = &[
    (
        "contact_messages",
        r#"
        CREATE TABLE IF NOT EXISTS contact_messages (
            id INT AUTO_INCREMENT PRIMARY KEY,
            name VARCHAR(100) NOT NULL,
            email VARCHAR(100) NOT NULL,
            phone VARCHAR(20),
            course VARCHAR(100),
            message TEXT NOT NULL,
            submitted_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    ),
    (
        "newsletter_subscribers",
        r#"
        CREATE TABLE IF NOT EXISTS newsletter_subscribers (
            id INT AUTO_INCREMENT PRIMARY KEY,
            email VARCHAR(255) NOT NULL UNIQUE,
            subscribed_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    ),
    (
        "plan_orders",
        r#"
        CREATE TABLE IF NOT EXISTS plan_orders (
            id INT AUTO_INCREMENT PRIMARY KEY,
            user_id VARCHAR(36) NOT NULL,
            plan VARCHAR(50) NOT NULL,
            price DOUBLE NOT NULL,
            ordered_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    ),
    (
        "users",
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id VARCHAR(36) PRIMARY KEY,
            fullname VARCHAR(100) NOT NULL,
            email VARCHAR(100) NOT NULL UNIQUE,
            phone VARCHAR(20) NOT NULL,
            course VARCHAR(100) NOT NULL,
            password_hash VARCHAR(255),
            dob DATE,
            gender VARCHAR(10),
            address TEXT,
            certificates TEXT,
            resume VARCHAR(255),
            profile_image VARCHAR(255),
            skills TEXT,
            languages TEXT,
            education TEXT,
            jobs TEXT,
            extra_course TEXT,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    ),
    (
        "trainers",
        r#"
        CREATE TABLE IF NOT EXISTS trainers (
            id VARCHAR(20) PRIMARY KEY,
            name VARCHAR(100) NOT NULL,
            email VARCHAR(100) NOT NULL UNIQUE,
            password_hash VARCHAR(255),
            dob DATE,
            gender VARCHAR(10),
            phone VARCHAR(20),
            address TEXT,
            qualification VARCHAR(100),
            experience INT,
            skills TEXT,
            certifications TEXT,
            linkedin VARCHAR(255),
            profile_image VARCHAR(255),
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    ),
    (
        "courses",
        r#"
        CREATE TABLE IF NOT EXISTS courses (
            id INT AUTO_INCREMENT PRIMARY KEY,
            trainer_id VARCHAR(20) NOT NULL,
            title VARCHAR(100) NOT NULL,
            description TEXT NOT NULL,
            mode VARCHAR(20) NOT NULL,
            duration VARCHAR(50),
            fee INT,
            start_date DATE,
            time_slots TEXT,
            tags TEXT,
            media TEXT,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
            INDEX idx_courses_trainer (trainer_id)
        )
        "#,
    ),
    (
        "enrollments",
        r#"
        CREATE TABLE IF NOT EXISTS enrollments (
            id INT AUTO_INCREMENT PRIMARY KEY,
            full_name VARCHAR(100) NOT NULL,
            email VARCHAR(100) NOT NULL,
            phone VARCHAR(20),
            qualification VARCHAR(100),
            current_study VARCHAR(255),
            address TEXT,
            city VARCHAR(100),
            state VARCHAR(100),
            zip_code VARCHAR(10),
            service TEXT,
            training TEXT,
            other_training_text VARCHAR(255),
            needs_addons VARCHAR(3),
            addon TEXT,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    ),
    (
        "webinar_registrations",
        r#"
        CREATE TABLE IF NOT EXISTS webinar_registrations (
            id INT AUTO_INCREMENT PRIMARY KEY,
            name VARCHAR(100) NOT NULL,
            email VARCHAR(100) NOT NULL,
            phone VARCHAR(20),
            topic VARCHAR(100),
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    ),
    (
        "resume_submissions",
        r#"
        CREATE TABLE IF NOT EXISTS resume_submissions (
            id INT AUTO_INCREMENT PRIMARY KEY,
            email VARCHAR(100) NOT NULL,
            filename VARCHAR(255) NOT NULL,
            stored_name VARCHAR(255) NOT NULL,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    ),
    (
        "offline_donations",
        r#"
        CREATE TABLE IF NOT EXISTS offline_donations (
            id INT AUTO_INCREMENT PRIMARY KEY,
            village_name VARCHAR(100) NOT NULL,
            collection_date DATE NOT NULL,
            manager_name VARCHAR(255) NOT NULL,
            team_members VARCHAR(500),
            trainers VARCHAR(500),
            amount DOUBLE NOT NULL,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    ),
    (
        "projects",
        r#"
        CREATE TABLE IF NOT EXISTS projects (
            id INT AUTO_INCREMENT PRIMARY KEY,
            project_name VARCHAR(255) NOT NULL,
            short_description TEXT NOT NULL,
            category VARCHAR(100) NOT NULL,
            technologies VARCHAR(255) NOT NULL,
            languages VARCHAR(255) NOT NULL,
            complexity VARCHAR(20) NOT NULL,
            country VARCHAR(100) NOT NULL,
            startup_company VARCHAR(255) NOT NULL,
            submitted_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    ),
    (
        "overseas_courses",
        r#"
        CREATE TABLE IF NOT EXISTS overseas_courses (
            id INT AUTO_INCREMENT PRIMARY KEY,
            university_name VARCHAR(255) NOT NULL,
            course_name VARCHAR(255) NOT NULL,
            country VARCHAR(100) NOT NULL,
            city VARCHAR(100),
            course_type VARCHAR(100),
            duration VARCHAR(50),
            tuition_fee DOUBLE,
            intake_month VARCHAR(50),
            ielts_required DOUBLE,
            toefl_required INT,
            gpa_required DOUBLE,
            scholarships TEXT,
            application_deadline DATE,
            career_outcomes TEXT,
            course_structure TEXT,
            description TEXT,
            image_url VARCHAR(500),
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        ) DEFAULT CHARSET=utf8mb4
        "#,
    ),
    (
        "nonprofit",
        r#"
        CREATE TABLE IF NOT EXISTS nonprofit (
            id INT AUTO_INCREMENT PRIMARY KEY,
            name VARCHAR(100) NOT NULL,
            email VARCHAR(100) NOT NULL UNIQUE,
            password_hash VARCHAR(255) NOT NULL,
            phone VARCHAR(20),
            aadhaar_number VARCHAR(12) UNIQUE,
            age INT,
            address_line1 VARCHAR(255),
            zip_code VARCHAR(10),
            country VARCHAR(100),
            state VARCHAR(100),
            district VARCHAR(100),
            mandal VARCHAR(100),
            village VARCHAR(100),
            user_type ENUM('Trainer', 'Manager', 'Donor', 'Student', 'Adult') NOT NULL,
            gender ENUM('Male', 'Female', 'Other'),
            profile_image VARCHAR(255),
            profile_complete BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    ),
    (
        "trainer_profiles",
        r#"
        CREATE TABLE IF NOT EXISTS trainer_profiles (
            id INT AUTO_INCREMENT PRIMARY KEY,
            user_id INT NOT NULL,
            skills TEXT,
            experience VARCHAR(100),
            certifications TEXT,
            FOREIGN KEY (user_id) REFERENCES nonprofit(id) ON DELETE CASCADE
        )
        "#,
    ),
    (
        "manager_profiles",
        r#"
        CREATE TABLE IF NOT EXISTS manager_profiles (
            id INT AUTO_INCREMENT PRIMARY KEY,
            user_id INT NOT NULL,
            organization_name VARCHAR(255),
            role VARCHAR(100),
            programs_managed TEXT,
            FOREIGN KEY (user_id) REFERENCES nonprofit(id) ON DELETE CASCADE
        )
        "#,
    ),
    (
        "donor_profiles",
        r#"
        CREATE TABLE IF NOT EXISTS donor_profiles (
            id INT AUTO_INCREMENT PRIMARY KEY,
            user_id INT NOT NULL,
            donation_preference VARCHAR(255),
            cause_program TEXT,
            FOREIGN KEY (user_id) REFERENCES nonprofit(id) ON DELETE CASCADE
        )
        "#,
    ),
    (
        "student_profiles",
        r#"
        CREATE TABLE IF NOT EXISTS student_profiles (
            id INT AUTO_INCREMENT PRIMARY KEY,
            user_id INT NOT NULL,
            education VARCHAR(255),
            skills TEXT,
            FOREIGN KEY (user_id) REFERENCES nonprofit(id) ON DELETE CASCADE
        )
        "#,
    ),
    (
        "adults_profiles",
        r#"
        CREATE TABLE IF NOT EXISTS adults_profiles (
            id INT AUTO_INCREMENT PRIMARY KEY,
            user_id INT NOT NULL,
            occupation VARCHAR(255),
            interests TEXT,
            monthly_income INT,
            education_level ENUM('Illiterate', 'Primary', 'Secondary'),
            FOREIGN KEY (user_id) REFERENCES nonprofit(id) ON DELETE CASCADE
        )
        "#,
    ),
    (
        "manager_operational",
        r#"
        CREATE TABLE IF NOT EXISTS manager_operational (
            id INT AUTO_INCREMENT PRIMARY KEY,
            manager_id INT NOT NULL UNIQUE,
            villages TEXT,
            trainers TEXT,
            programs TEXT,
            students_by_village TEXT,
            resources TEXT,
            totals TEXT,
            updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP,
            FOREIGN KEY (manager_id) REFERENCES nonprofit(id) ON DELETE CASCADE
        ) DEFAULT CHARSET=utf8mb4
        "#,
    ),
];

/// Create any missing table. Safe to run on every start.
pub async fn ensure_schema(pool: &MySqlPool) -> Result<(), sqlx::Error> {
    for (name, ddl) in TABLES {
        sqlx::query(ddl).execute(pool).await?;
        info!("Table '{}' ready", name);
    }
    Ok(())
}
