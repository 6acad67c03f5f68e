mod config;
mod render;

use std::io::{self, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use recipe_core::adapters::outbound::memory::InMemoryRecipeRepository;
use recipe_core::domain::ports::inbound::RecipeService;
use recipe_core::domain::ports::outbound::RecipeRepository;
use recipe_core::domain::services::RecipeServiceImpl;
use recipe_core::domain::{ListState, RecipeView};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::from_filename(".env.local").ok();

    let settings = config::read_config()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.logging.filter))
        .context("Invalid logging filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let repository = if settings.catalog.seed_recipes {
        InMemoryRecipeRepository::seeded()
    } else {
        InMemoryRecipeRepository::new()
    };
    tracing::info!(
        recipes = repository.len(),
        page_size = settings.catalog.page_size,
        "recipe book ready"
    );

    let service = RecipeServiceImpl::new(Arc::new(repository));

    let mut stdout = io::stdout().lock();
    for view in [RecipeView::Active, RecipeView::Archived] {
        print_view(&mut stdout, &service, view, settings.catalog.page_size)?;
    }

    if let Some(first) = service.repository().snapshot().first() {
        writeln!(stdout)?;
        write!(stdout, "{}", render::RecipeDetail(first))?;
    }

    Ok(())
}

/// Walk every page of one view, as a user paging with "Next" would.
fn print_view(
    out: &mut impl Write,
    service: &impl RecipeService,
    view: RecipeView,
    page_size: usize,
) -> Result<()> {
    let mut state = ListState::new(view);
    writeln!(out, "== {} ==", render::view_heading(view))?;

    loop {
        let page = service.list_recipes(&state.query(page_size));
        write!(out, "{}", render::PageView(&page))?;
        if !page.has_next() {
            break;
        }
        state.next_page(&page);
    }

    writeln!(out)?;
    Ok(())
}
