use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

/// Placeholder key written by the config template; never sent to the API.
const PLACEHOLDER_API_KEY: &str = "your-openai-api-key-here";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub providers: ProvidersConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AnalysisConfig {
    pub model: String,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    pub openai: ProviderConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProviderConfig {
    pub api_key: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OutputConfig {
    #[serde(default = "OutputConfig::default_site_root")]
    pub site_root: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            site_root: Self::default_site_root(),
        }
    }
}

impl OutputConfig {
    fn default_site_root() -> String {
        ".".to_string()
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_dir()?.join("config.json");

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'voxelgen init' to create config.",
                config_path.display()
            );
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = serde_json::from_str(&content)?;

        info!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    /// The `OpenAI` API key to use: the `OPENAI_API_KEY` environment variable
    /// when set, otherwise the configured key. Returns `None` when neither is
    /// usable (empty or still the template placeholder).
    #[must_use]
    pub fn resolve_openai_api_key(&self) -> Option<String> {
        self.resolve_api_key_from(std::env::var("OPENAI_API_KEY").ok())
    }

    fn resolve_api_key_from(&self, env_key: Option<String>) -> Option<String> {
        if let Some(key) = env_key {
            if !key.trim().is_empty() {
                return Some(key);
            }
        }

        let configured = self.providers.openai.api_key.trim();
        if configured.is_empty() || configured == PLACEHOLDER_API_KEY {
            None
        } else {
            Some(configured.to_string())
        }
    }

    fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("voxelgen"))
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        std::fs::write(&config_path, Self::template())?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Edit the config file and add your OpenAI API key");
        println!("      (or set the OPENAI_API_KEY environment variable)");
        println!("   2. Run 'voxelgen analyze <image>' to describe an image");
        println!("   3. Run 'voxelgen run <image>' to generate voxel scene artifacts");
        println!();
        println!("🔧 Configuration options:");
        println!("   - analysis.model: vision model to use (gpt-4o-mini, gpt-4o, etc.)");
        println!("   - analysis.prompt: override the built-in scene analysis prompt");
        println!("   - output.site_root: front-end project root that receives artifacts");
        println!();
        Ok(())
    }

    const fn template() -> &'static str {
        r#"{
  "analysis": {
    "model": "gpt-4o-mini",
    "max_tokens": 1000
  },
  "providers": {
    "openai": {
      "api_key": "your-openai-api-key-here"
    }
  },
  "output": {
    "site_root": "."
  }
}"#
    }
}
