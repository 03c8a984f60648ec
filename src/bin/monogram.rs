use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

use monogram::{
    Avatar as _, BlockInitialsRenderer, FsUserStore, PlaceholderAvatar, RasterRenderer as _,
    RenderStyle, SvgInitialsRenderer, Theme, UserIdentity, VectorRenderer as _,
};

#[derive(Parser, Debug)]
#[command(name = "monogram", version)]
struct Cli {
    /// Display name to derive initials and color from.
    #[arg(long)]
    name: String,

    /// Avatar edge length in pixels.
    #[arg(long, default_value_t = 512)]
    size: u32,

    /// Render the dark-theme variant.
    #[arg(long)]
    dark: bool,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Cache directory. When set, the avatar goes through the per-user
    /// store: a second run with the same arguments serves the cached copy.
    #[arg(long)]
    store: Option<PathBuf>,

    /// User id for the cache directory (diagnostics only).
    #[arg(long, default_value = "cli")]
    user: String,

    /// Style JSON (palette, font family, text ratio). Defaults compiled in.
    #[arg(long)]
    style: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let style = match &cli.style {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("read style '{}'", path.display()))?;
            serde_json::from_str(&raw).with_context(|| "parse style JSON")?
        }
        None => RenderStyle::default(),
    };

    let theme = Theme::from_dark_flag(cli.dark);
    let data = match &cli.store {
        Some(dir) => {
            let store = FsUserStore::open(dir.join(&cli.user))?;
            let identity = UserIdentity::new(cli.user.clone(), cli.name.clone());
            let avatar = PlaceholderAvatar::with_default_renderers(identity, store, style);
            let size = i32::try_from(cli.size).with_context(|| "size out of range")?;
            avatar.get_file(size, cli.dark)?.data
        }
        None => {
            let vector = SvgInitialsRenderer::new(style.clone());
            match vector.render(&cli.name, cli.size, theme)? {
                Some(bytes) => bytes,
                None => BlockInitialsRenderer::new(style).render(&cli.name, cli.size, theme)?,
            }
        }
    };

    if let Some(parent) = cli.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&cli.out, &data)
        .with_context(|| format!("write png '{}'", cli.out.display()))?;

    eprintln!("wrote {}", cli.out.display());
    Ok(())
}
