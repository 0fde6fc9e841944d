use contracts::domain::a008_item::aggregate::{Item, ItemDto};
use contracts::shared::pagination::{Page, PageQuery};

use crate::shared::api::{ApiError, ResourceApi};

const ITEMS: ResourceApi = ResourceApi::new("/items");

/// Rows carrying neither member are dropped; totals stay as reported by the server
pub async fn fetch_page(query: PageQuery) -> Result<Page<Item>, ApiError> {
    let page: Page<ItemDto> = ITEMS.list(query).await?;
    Ok(Page {
        items: page.items.into_iter().filter_map(ItemDto::into_item).collect(),
        total_count: page.total_count,
        total_pages: page.total_pages,
        current_page: page.current_page,
    })
}
