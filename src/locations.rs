//! The fixed table mapping menu indexes to location names.
//!
//! The table is configuration: built once at startup (the builtin one or one read from a csv file, see io::csv)
//! and only read afterwards. The graph knows nothing about indexes.

use indexmap::IndexMap;

use crate::error::{Result, RouteError};


lazy_static! {
    /// The builtin table of locations
    pub static ref DEFAULT_LOCATIONS : LocationTable = LocationTable::builtin();
}


#[derive(Clone, Debug)]
pub struct LocationTable {
    names : IndexMap<u32, String>,
} // end of struct LocationTable


impl LocationTable {

    /// entries are (index, name). Indexes must be positive and unique
    pub fn new<S : Into<String>>(entries : Vec<(u32, S)>) -> Result<Self> {
        let mut names = IndexMap::<u32, String>::with_capacity(entries.len());
        for (rank, (index, name)) in entries.into_iter().enumerate() {
            let name : String = name.into();
            if index == 0 {
                return Err(RouteError::MalformedLocation{record : rank + 1, reason : String::from("index must be positive")});
            }
            if name.trim().is_empty() {
                return Err(RouteError::MalformedLocation{record : rank + 1, reason : format!("empty name for index {}", index)});
            }
            if let Some(previous) = names.insert(index, name) {
                return Err(RouteError::MalformedLocation{record : rank + 1, reason : format!("index {} already given to {}", index, previous)});
            }
        }
        Ok(LocationTable{names})
    } // end of new


    fn builtin() -> Self {
        let names = [(1, "Pueblo Paleta"), (2, "Aldea Azalea"), (3, "Ciudad Safiro"), (4, "Ciudad Lavanda"), (5, "Aldea Fuego")]
            .into_iter()
            .map(|(i, name)| (i, String::from(name)))
            .collect();
        LocationTable{names}
    }


    /// get name associated to index
    pub fn get_name(&self, index : u32) -> Option<&str> {
        self.names.get(&index).map(|s| s.as_str())
    }

    /// as get_name, but unknown index is an error
    pub fn resolve(&self, index : u32) -> Result<&str> {
        self.get_name(index).ok_or(RouteError::UnknownLocationIndex(index))
    }

    /// (index, name) in configuration order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> + '_ {
        self.names.iter().map(|(i, s)| (*i, s.as_str()))
    }

    pub fn len(&self) -> usize { self.names.len() }

    pub fn is_empty(&self) -> bool { self.names.is_empty() }

    /// The lines of a menu listing locations, as "1. Pueblo Paleta"
    pub fn menu(&self) -> String {
        self.iter().map(|(i, name)| format!("{}. {}\n", i, name)).collect()
    }

} // end of impl LocationTable


impl Default for LocationTable {
    fn default() -> Self {
        DEFAULT_LOCATIONS.clone()
    }
}


//=========================================================================


// end of mod tests
