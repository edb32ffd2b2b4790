use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// On-disk layout of a modlist instance.
///
/// Both layouts are MO2 portable instances; they only differ in where the
/// instance lives relative to `base_dir`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InstanceLayout {
    /// `{base_dir}/{modlist}/MODS/...` as created by the Nolvus dashboard
    Nolvus,
    /// `{base_dir}/{game}/{modlist}/...` as installed by Wabbajack
    Wabbajack,
}

/// Game the modlist targets. Selects the Nexus Mods domain used for links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum Game {
    #[serde(alias = "skyrimse", alias = "SSE")]
    #[value(name = "SkyrimSE", alias = "skyrimse", alias = "sse")]
    SkyrimSE,
    #[serde(alias = "fallout4", alias = "FO4")]
    #[value(name = "Fallout4", alias = "fallout4", alias = "fo4")]
    Fallout4,
}

impl Game {
    /// Nexus Mods game domain, as it appears in mod page URLs.
    pub fn nexus_domain(&self) -> &'static str {
        match self {
            Game::SkyrimSE => "skyrimspecialedition",
            Game::Fallout4 => "fallout4",
        }
    }

    /// Directory name used by Wabbajack installs.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Game::SkyrimSE => "SkyrimSE",
            Game::Fallout4 => "Fallout4",
        }
    }
}

/// Parameters for one modlist-to-HTML run.
///
/// Every field has a default so a partial YAML file or a handful of
/// `MODLIST_*` environment variables is enough to describe a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Storage location holding the modlist instances
    pub base_dir: Utf8PathBuf,
    pub layout: InstanceLayout,
    pub game: Game,
    pub modlist: String,
    pub profile: String,
    /// Version label shown in the page title
    pub version: String,
    pub output_dir: Utf8PathBuf,
    /// Log directory; falls back to `output_dir` when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<Utf8PathBuf>,
    pub debug: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            base_dir: Utf8PathBuf::from("D:/Nolvus/Instances"),
            layout: InstanceLayout::Nolvus,
            game: Game::SkyrimSE,
            modlist: "Nolvus Awakening".to_string(),
            profile: "Nolvus Awakening".to_string(),
            version: "6.0.20".to_string(),
            output_dir: Utf8PathBuf::from("D:/Modlists"),
            log_dir: None,
            debug: false,
        }
    }
}

impl RunConfig {
    /// Root of the MO2 instance (the directory holding `profiles/` and `mods/`).
    pub fn instance_dir(&self) -> Utf8PathBuf {
        match self.layout {
            InstanceLayout::Nolvus => self.base_dir.join(&self.modlist).join("MODS"),
            InstanceLayout::Wabbajack => self
                .base_dir
                .join(self.game.dir_name())
                .join(&self.modlist),
        }
    }

    /// Path of the profile's `modlist.txt`.
    pub fn load_order_path(&self) -> Utf8PathBuf {
        self.instance_dir()
            .join("profiles")
            .join(&self.profile)
            .join("modlist.txt")
    }

    /// Path of a mod's `meta.ini`.
    pub fn meta_ini_path(&self, mod_name: &str) -> Utf8PathBuf {
        self.instance_dir()
            .join("mods")
            .join(mod_name)
            .join("meta.ini")
    }

    pub fn output_html_path(&self) -> Utf8PathBuf {
        self.output_dir
            .join(format!("mods_{} ({}).html", self.modlist, self.profile))
    }

    pub fn effective_log_dir(&self) -> Utf8PathBuf {
        self.log_dir.clone().unwrap_or_else(|| self.output_dir.clone())
    }

    /// Page title, e.g. `Mods for Nolvus Awakening (Nolvus Awakening) 6.0.20`.
    pub fn title(&self) -> String {
        format!("Mods for {} ({}) {}", self.modlist, self.profile, self.version)
    }

    /// Nexus Mods page for a mod id.
    pub fn mod_page_url(&self, mod_id: &str) -> String {
        format!(
            "https://www.nexusmods.com/{}/mods/{}",
            self.game.nexus_domain(),
            mod_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_config_defaults() {
        let config = RunConfig::default();
        assert_eq!(config.layout, InstanceLayout::Nolvus);
        assert_eq!(config.game, Game::SkyrimSE);
        assert_eq!(config.version, "6.0.20");
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn test_nolvus_paths() {
        let config = RunConfig::default();
        assert_eq!(
            config.load_order_path(),
            Utf8PathBuf::from(
                "D:/Nolvus/Instances/Nolvus Awakening/MODS/profiles/Nolvus Awakening/modlist.txt"
            )
        );
        assert_eq!(
            config.meta_ini_path("SkyUI"),
            Utf8PathBuf::from("D:/Nolvus/Instances/Nolvus Awakening/MODS/mods/SkyUI/meta.ini")
        );
    }

    #[test]
    fn test_wabbajack_paths() {
        let config = RunConfig {
            base_dir: Utf8PathBuf::from("D:/Wabbajack"),
            layout: InstanceLayout::Wabbajack,
            game: Game::Fallout4,
            modlist: "Magnum Opus".to_string(),
            profile: "Default".to_string(),
            ..RunConfig::default()
        };
        assert_eq!(
            config.load_order_path(),
            Utf8PathBuf::from("D:/Wabbajack/Fallout4/Magnum Opus/profiles/Default/modlist.txt")
        );
        assert_eq!(
            config.meta_ini_path("PRP"),
            Utf8PathBuf::from("D:/Wabbajack/Fallout4/Magnum Opus/mods/PRP/meta.ini")
        );
    }

    #[test]
    fn test_output_and_log_paths() {
        let mut config = RunConfig::default();
        assert_eq!(
            config.output_html_path(),
            Utf8PathBuf::from("D:/Modlists/mods_Nolvus Awakening (Nolvus Awakening).html")
        );
        assert_eq!(config.effective_log_dir(), Utf8PathBuf::from("D:/Modlists"));

        config.log_dir = Some(Utf8PathBuf::from("D:/Logs"));
        assert_eq!(config.effective_log_dir(), Utf8PathBuf::from("D:/Logs"));
    }

    #[test]
    fn test_mod_page_url_uses_game_domain() {
        let mut config = RunConfig::default();
        assert_eq!(
            config.mod_page_url("3863"),
            "https://www.nexusmods.com/skyrimspecialedition/mods/3863"
        );

        config.game = Game::Fallout4;
        assert_eq!(
            config.mod_page_url("4598"),
            "https://www.nexusmods.com/fallout4/mods/4598"
        );
    }

    #[test]
    fn test_title() {
        let config = RunConfig::default();
        assert_eq!(
            config.title(),
            "Mods for Nolvus Awakening (Nolvus Awakening) 6.0.20"
        );
    }
}
