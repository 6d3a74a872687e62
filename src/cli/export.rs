//! Export CLI command

use crate::error::ExpenseResult;
use crate::services::ExpenseManager;
use crate::storage::ExpenseStore;

pub fn handle_export<S: ExpenseStore>(manager: &ExpenseManager<S>) -> ExpenseResult<()> {
    match manager.export() {
        Some(path) => println!(
            "Exported {} expenses to: {}",
            manager.list_all().len(),
            path.display()
        ),
        None => println!("Error exporting expenses"),
    }
    Ok(())
}
