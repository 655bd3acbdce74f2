use serde::{Deserialize, Serialize};

/// Sections of the green-living library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LibraryCategory {
    #[default]
    Tips,
    Recipes,
    #[serde(rename = "DIY Projects")]
    DiyProjects,
}

impl LibraryCategory {
    pub const ALL: [LibraryCategory; 3] = [Self::Tips, Self::Recipes, Self::DiyProjects];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tips => "Tips",
            Self::Recipes => "Recipes",
            Self::DiyProjects => "DIY Projects",
        }
    }

    pub(crate) const fn prompt(self) -> &'static str {
        match self {
            Self::Tips => {
                "Generate 4 detailed and practical tips for reducing household waste. Each tip should have a title and a detailed description."
            }
            Self::Recipes => {
                "Generate 4 simple and delicious plant-based recipes that are beginner-friendly. Each recipe should have a title and a detailed description including ingredients and steps."
            }
            Self::DiyProjects => {
                "Generate 4 creative DIY projects for upcycling common household items. Each project should have a title and a detailed description of the materials and instructions."
            }
        }
    }
}

impl std::fmt::Display for LibraryCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tip, recipe or project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryItem {
    pub title: String,
    pub description: String,
}
