use crate::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const PDF_MEDIA_TYPE: &str = "application/pdf";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternshipPosting {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub location: String,
    pub duration: String,
    pub stipend: String,
    pub description: String,
    pub skills: Vec<String>,
}

/// A posting annotated with a simulated match score and rationale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(flatten)]
    pub posting: InternshipPosting,
    pub match_score: u8,
    pub reason: String,
    pub application_url: String,
}

impl Recommendation {
    pub fn strength(&self) -> MatchStrength {
        MatchStrength::from_score(self.match_score)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrength {
    Strong,
    Moderate,
    Weak,
}

impl MatchStrength {
    pub fn from_score(score: u8) -> Self {
        if score >= 85 {
            MatchStrength::Strong
        } else if score >= 70 {
            MatchStrength::Moderate
        } else {
            MatchStrength::Weak
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStrength::Strong => "strong",
            MatchStrength::Moderate => "moderate",
            MatchStrength::Weak => "weak",
        }
    }
}

impl fmt::Display for MatchStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub education: String,
    pub university: String,
    pub graduation_year: String,
    pub skills: Vec<String>,
}

impl UserProfile {
    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
            ProfileField::Location => &self.location,
            ProfileField::Education => &self.education,
            ProfileField::University => &self.university,
            ProfileField::GraduationYear => &self.graduation_year,
        }
    }

    pub fn set_field(&mut self, field: ProfileField, value: String) {
        let slot = match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Email => &mut self.email,
            ProfileField::Phone => &mut self.phone,
            ProfileField::Location => &mut self.location,
            ProfileField::Education => &mut self.education,
            ProfileField::University => &mut self.university,
            ProfileField::GraduationYear => &mut self.graduation_year,
        };
        *slot = value;
    }
}

/// Scalar profile fields editable through `editField`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfileField {
    Name,
    Email,
    Phone,
    Location,
    Education,
    University,
    GraduationYear,
}

impl ProfileField {
    pub const ALL: [ProfileField; 7] = [
        ProfileField::Name,
        ProfileField::Email,
        ProfileField::Phone,
        ProfileField::Location,
        ProfileField::Education,
        ProfileField::University,
        ProfileField::GraduationYear,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Name => "Name",
            ProfileField::Email => "Email",
            ProfileField::Phone => "Phone",
            ProfileField::Location => "Location",
            ProfileField::Education => "Education",
            ProfileField::University => "University",
            ProfileField::GraduationYear => "Graduation Year",
        }
    }
}

impl FromStr for ProfileField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(ProfileField::Name),
            "email" => Ok(ProfileField::Email),
            "phone" => Ok(ProfileField::Phone),
            "location" => Ok(ProfileField::Location),
            "education" => Ok(ProfileField::Education),
            "university" => Ok(ProfileField::University),
            "graduationYear" | "graduation_year" => Ok(ProfileField::GraduationYear),
            other => Err(CoreError::InvalidInput {
                message: format!("unknown profile field '{}'", other),
            }),
        }
    }
}

/// Handle to a user-selected resume. The file itself is never opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeFile {
    pub name: String,
    pub path: Option<PathBuf>,
    pub media_type: String,
}

impl ResumeFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
            media_type: media_type.into(),
        }
    }

    /// Builds a handle whose declared media type comes from the extension.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let media_type = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(media_type_for_extension)
            .unwrap_or("application/octet-stream");

        Self {
            name,
            path: Some(path.to_path_buf()),
            media_type: media_type.to_string(),
        }
    }

    pub fn is_pdf(&self) -> bool {
        self.media_type.eq_ignore_ascii_case(PDF_MEDIA_TYPE)
    }
}

fn media_type_for_extension(ext: &str) -> &'static str {
    match ext.to_ascii_lowercase().as_str() {
        "pdf" => PDF_MEDIA_TYPE,
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "txt" => "text/plain",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        _ => "application/octet-stream",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Page {
    #[default]
    Home,
    Recommendations,
    Profile,
    PostingDetail(u32),
}
