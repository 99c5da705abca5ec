//! HTML bodies for confirmation mails. Every user-supplied value goes
//! through [`escape`].

use super::Email;

pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn signed(body: String, team: &str) -> String {
    format!("{body}<br><p>Regards,<br>{team}</p>")
}

pub fn contact_received(to: &str, name: &str, course: Option<&str>, message: &str) -> Email {
    let topic = course.unwrap_or("General Inquiry");
    let body = format!(
        "<p>Dear {},</p>\
         <p>Thanks for reaching out to us!</p>\
         <p>We've received your message regarding <strong>{}</strong>.</p>\
         <p>Our team will get back to you within 24 hours.</p>\
         <hr><p><strong>Your Message:</strong><br>{}</p>",
        escape(name),
        escape(topic),
        escape(message),
    );

    Email {
        to: to.to_owned(),
        subject: "Thanks for contacting us!".to_owned(),
        html: signed(body, "Hitaishi Team"),
    }
}

pub fn newsletter_welcome(to: &str) -> Email {
    let body = "<p>Hi there!</p>\
                <p>Thanks for subscribing to the Hitaishi newsletter. \
                Stay tuned for course updates, job tips, and resources!</p>"
        .to_owned();

    Email {
        to: to.to_owned(),
        subject: "You've Subscribed to Hitaishi Newsletter!".to_owned(),
        html: signed(body, "The Hitaishi Team"),
    }
}

pub fn plan_interest(to: &str, plan: &str) -> Email {
    let body = format!(
        "<h2>Thank you for choosing the {} plan!</h2>\
         <p>We've received your interest and will get in touch shortly.</p>\
         <p>If you have any questions, feel free to reply to this email.</p>",
        escape(plan),
    );

    Email {
        to: to.to_owned(),
        subject: format!("Hitaishi Training - {plan} Plan Confirmation"),
        html: signed(body, "Hitaishi Training Team"),
    }
}

pub fn plan_summary(to: &str, plan: &str, price: &str, features: &[String]) -> Email {
    let items: String = features
        .iter()
        .map(|f| format!("<li>{}</li>", escape(f)))
        .collect();
    let body = format!(
        "<h2>Thank you for choosing the {} Plan</h2>\
         <p><strong>Price:</strong> {}</p>\
         <p><strong>Features:</strong></p><ul>{}</ul>",
        escape(plan),
        escape(price),
        items,
    );

    Email {
        to: to.to_owned(),
        subject: format!("You've selected the {plan} Plan"),
        html: signed(body, "Hitaishi Trainings"),
    }
}

pub struct EnrollmentSummary<'a> {
    pub full_name: &'a str,
    pub phone: Option<&'a str>,
    pub qualification: Option<&'a str>,
    pub current_study: Option<&'a str>,
    pub address: String,
    pub services: &'a str,
    pub trainings: &'a str,
    pub needs_addons: bool,
    pub addons: &'a str,
}

pub fn enrollment_confirmation(to: &str, e: &EnrollmentSummary<'_>) -> Email {
    let row = |label: &str, value: &str| {
        format!("<li><strong>{}:</strong> {}</li>", label, escape(value))
    };

    let mut items = String::new();
    items.push_str(&row("Phone", e.phone.unwrap_or("-")));
    items.push_str(&row("Qualification", e.qualification.unwrap_or("-")));
    items.push_str(&row("Current Study/Profession", e.current_study.unwrap_or("-")));
    items.push_str(&row("Address", &e.address));
    items.push_str(&row("Interested Services", e.services));
    items.push_str(&row("Preferred Trainings", e.trainings));
    items.push_str(&row(
        "Need Add-ons",
        if e.needs_addons { "Yes" } else { "No" },
    ));
    if e.needs_addons {
        items.push_str(&row("Add-ons", e.addons));
    }

    let body = format!(
        "<h2>Hi {},</h2>\
         <p>Thank you for enrolling with <strong>Hitaishi Training</strong>!</p>\
         <p>Here are your submitted details:</p><ul>{}</ul>\
         <p>We will contact you shortly with the next steps.</p>",
        escape(e.full_name),
        items,
    );

    Email {
        to: to.to_owned(),
        subject: "Enrollment Confirmation - Hitaishi Training".to_owned(),
        html: signed(body, "Hitaishi Training Team"),
    }
}

pub fn webinar_confirmation(to: &str, name: &str, topic: Option<&str>) -> Email {
    let body = format!(
        "<p>Hi {},</p>\
         <p>Thank you for registering for our free webinar on <strong>{}</strong>.</p>\
         <p>We'll send you the meeting link shortly.</p>",
        escape(name),
        escape(topic.unwrap_or("our upcoming session")),
    );

    Email {
        to: to.to_owned(),
        subject: "Webinar Registration Confirmation".to_owned(),
        html: signed(body, "Hitaishi Trainings Team"),
    }
}

/// Notice to the review team; the file itself stays in the upload store.
pub fn resume_for_review(to: &str, submitter: &str, filename: &str, stored_name: &str) -> Email {
    let body = format!(
        "<p><strong>{}</strong> has submitted a resume for review.</p>\
         <p>File: {} (stored as <code>/uploads/{}</code>)</p>",
        escape(submitter),
        escape(filename),
        escape(stored_name),
    );

    Email {
        to: to.to_owned(),
        subject: "New Resume Submitted".to_owned(),
        html: body,
    }
}

pub fn resume_received(to: &str) -> Email {
    let body = "<p>Hi,<br>Thank you for submitting your resume. \
                Our experts will get back to you soon.</p>"
        .to_owned();

    Email {
        to: to.to_owned(),
        subject: "We Received Your Resume!".to_owned(),
        html: signed(body, "Hitaishi Trainings"),
    }
}
