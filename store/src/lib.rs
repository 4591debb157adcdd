use serde::{Deserialize, Serialize};

pub mod autosave;
pub mod backup;
pub mod category;
pub mod ids;
pub mod links;
pub mod page;
pub mod product;
pub mod settings;
pub mod slug;

pub use category::Category;
pub use links::{LinkItem, LinkType};
pub use page::CustomPage;
pub use product::Product;
pub use settings::StoreSettings;

// the aggregate store object
//
// this is the sole unit of persistence (one local storage key in the builder,
// one backup file on disk) and the sole input to every generator.  all of the
// nested settings structs deserialize through serde defaults, so a partial or
// outdated aggregate always normalizes to a well-formed one at the boundary.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreData {
    pub settings: StoreSettings,
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub custom_pages: Vec<CustomPage>,
    pub nav_links: Vec<LinkItem>,
}

// collection operations
//
// entities are created whole by the forms, replaced in place when edited
// (matched by id) and removed by filtering.  there is no soft-delete and no
// undo; the builder relies on the backup path for recovery.
impl StoreData {
    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Replace the product with the same id, returning false if none matched.
    pub fn update_product(&mut self, product: Product) -> bool {
        match self.products.iter_mut().find(|p| p.id == product.id) {
            Some(slot) => {
                *slot = product;
                true
            }
            None => false,
        }
    }

    pub fn remove_product(&mut self, id: &str) {
        self.products.retain(|p| p.id != id);
    }

    pub fn add_category(&mut self, category: Category) {
        self.categories.push(category);
    }

    pub fn update_category(&mut self, category: Category) -> bool {
        match self.categories.iter_mut().find(|c| c.id == category.id) {
            Some(slot) => {
                *slot = category;
                true
            }
            None => false,
        }
    }

    pub fn remove_category(&mut self, id: &str) {
        self.categories.retain(|c| c.id != id);
    }

    pub fn add_page(&mut self, page: CustomPage) {
        self.custom_pages.push(page);
    }

    pub fn update_page(&mut self, page: CustomPage) -> bool {
        match self.custom_pages.iter_mut().find(|p| p.id == page.id) {
            Some(slot) => {
                *slot = page;
                true
            }
            None => false,
        }
    }

    pub fn remove_page(&mut self, id: &str) {
        self.custom_pages.retain(|p| p.id != id);
    }

    pub fn add_link(&mut self, link: LinkItem) {
        self.nav_links.push(link);
    }

    pub fn update_link(&mut self, link: LinkItem) -> bool {
        match self.nav_links.iter_mut().find(|l| l.id == link.id) {
            Some(slot) => {
                *slot = link;
                true
            }
            None => false,
        }
    }

    pub fn remove_link(&mut self, id: &str) {
        self.nav_links.retain(|l| l.id != id);
    }

    /// Visible categories in display order.
    pub fn visible_categories(&self) -> Vec<&Category> {
        let mut out: Vec<&Category> = self.categories.iter().filter(|c| c.is_visible).collect();
        out.sort_by_key(|c| c.order);
        out
    }

    /// Visible nav links in display order.
    pub fn visible_links(&self) -> Vec<&LinkItem> {
        let mut out: Vec<&LinkItem> = self.nav_links.iter().filter(|l| l.is_visible).collect();
        out.sort_by_key(|l| l.order);
        out
    }

    /// Published custom pages, in insertion order.
    pub fn published_pages(&self) -> impl Iterator<Item = &CustomPage> {
        self.custom_pages.iter().filter(|p| p.is_published)
    }

    /// Number of products whose free-text category matches the given name.
    ///
    /// The association is a loose string join against Category.name, so a
    /// renamed category orphans its products.  The builder surfaces the count
    /// so the admin can notice.
    pub fn product_count_in(&self, category_name: &str) -> usize {
        self.products
            .iter()
            .filter(|p| p.category == category_name)
            .count()
    }
}
