//! Construct a (small) graph of routes from data from a csv
//!
//! Edge table: a header row then one route per row with fields origin, destination, cost
//! (or the spanish estacion, destino, costo). Other columns are ignored.
//! Location table: a header row then rows index, name.
//!
//! Loading is all or nothing, the first malformed record makes the whole load fail.


use std::io::{Read, BufReader};
use std::fs::OpenOptions;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;

use crate::error::{Result, RouteError};
use crate::tools::edge::RouteEdge;
use crate::routegraph::RouteGraph;
use crate::locations::LocationTable;


/// Parameters for reading csv files
#[derive(Copy, Clone, Debug)]
pub struct LoadParams {
    /// field separator
    delimiter : u8,
} // end of LoadParams


impl LoadParams {
    pub fn new(delimiter : u8) -> Self {
        LoadParams{delimiter}
    }

    /// get field separator
    pub fn get_delimiter(&self) -> u8 { self.delimiter }
}  // end of impl LoadParams


impl Default for LoadParams {
    fn default() -> Self {
        LoadParams{delimiter : b','}
    }
}


// converts a csv error at a given record. io errors keep their own kind
fn record_error(err : csv::Error, record : usize, source : &Path) -> RouteError {
    if err.is_io_error() {
        if let csv::ErrorKind::Io(e) = err.into_kind() {
            return RouteError::Io{path : source.to_path_buf(), source : e};
        }
        return RouteError::MalformedRecord{record, reason : String::from("io error")};
    }
    RouteError::MalformedRecord{record, reason : err.to_string()}
} // end of record_error


fn open_file(filepath : &Path) -> Result<BufReader<std::fs::File>> {
    match OpenOptions::new().read(true).open(filepath) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(e) => {
            log::error!("could not open file {:?}", filepath.as_os_str());
            Err(RouteError::Io{path : filepath.to_path_buf(), source : e})
        },
    }
} // end of open_file


fn read_edges<R : Read>(reader : R, params : &LoadParams, source : &Path) -> Result<Vec<RouteEdge>> {
    let mut rdr = ReaderBuilder::new().delimiter(params.get_delimiter()).flexible(false).has_headers(true)
                    .trim(Trim::All).from_reader(reader);
    let mut edges = Vec::<RouteEdge>::new();
    for (rank, result) in rdr.deserialize::<RouteEdge>().enumerate() {
        let nb_record = rank + 1;
        let edge = result.map_err(|e| record_error(e, nb_record, source))?;
        if edge.get_origin().is_empty() {
            return Err(RouteError::MalformedRecord{record : nb_record, reason : String::from("missing origin")});
        }
        if edge.get_destination().is_empty() {
            return Err(RouteError::MalformedRecord{record : nb_record, reason : String::from("missing destination")});
        }
        // NaN and inf parse as f64 but are not costs
        if !edge.get_cost().is_finite() {
            return Err(RouteError::MalformedRecord{record : nb_record, reason : format!("cost {} is not a number", edge.get_cost())});
        }
        log::trace!("{:?}", edge);
        edges.push(edge);
    }
    log::debug!("read {} edges from {:?}", edges.len(), source);
    Ok(edges)
} // end of read_edges


/// reads the edge table from any reader.
pub fn edges_from_csv<R : Read>(reader : R, params : &LoadParams) -> Result<Vec<RouteEdge>> {
    read_edges(reader, params, Path::new("<stream>"))
}


/// reads the edge table from a file
pub fn edges_from_csv_file(filepath : &Path, params : &LoadParams) -> Result<Vec<RouteEdge>> {
    let reader = open_file(filepath)?;
    read_edges(reader, params, filepath)
}


/// reads edge table from a file and builds the graph.
pub fn graph_from_csv_file(filepath : &Path, params : &LoadParams) -> Result<RouteGraph> {
    let edges = edges_from_csv_file(filepath, params)?;
    let graph = RouteGraph::from_edges(&edges);
    log::info!("graph_from_csv_file {:?} : {} nodes, {} edges", filepath.as_os_str(), graph.nb_nodes(), graph.nb_edges());
    Ok(graph)
} // end of graph_from_csv_file


//==================================================================================


#[derive(Debug, Deserialize)]
struct LocationRecord {
    #[serde(alias = "indice")]
    index : u32,
    #[serde(alias = "nombre")]
    name : String,
}


fn read_locations<R : Read>(reader : R, params : &LoadParams, source : &Path) -> Result<LocationTable> {
    let mut rdr = ReaderBuilder::new().delimiter(params.get_delimiter()).flexible(false).has_headers(true)
                    .trim(Trim::All).from_reader(reader);
    let mut entries = Vec::<(u32, String)>::new();
    for (rank, result) in rdr.deserialize::<LocationRecord>().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => { return Err(record_error(e, rank + 1, source)); },
            Err(e) => { return Err(RouteError::MalformedLocation{record : rank + 1, reason : e.to_string()}); },
        };
        entries.push((record.index, record.name));
    }
    log::debug!("read {} locations from {:?}", entries.len(), source);
    LocationTable::new(entries)
} // end of read_locations


/// reads a location table (index, name) from any reader
pub fn locations_from_csv<R : Read>(reader : R, params : &LoadParams) -> Result<LocationTable> {
    read_locations(reader, params, Path::new("<stream>"))
}


/// reads a location table (index, name) from a file
pub fn locations_from_csv_file(filepath : &Path, params : &LoadParams) -> Result<LocationTable> {
    let reader = open_file(filepath)?;
    read_locations(reader, params, filepath)
}


//==================================================================================


#[cfg(test)]
mod tests {

    use super::*;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }


    #[test]
    fn load_spanish_header() {
        log_init_test();
        //
        let data = "estacion,destino,costo\n\
                    Pueblo Paleta,Aldea Azalea,5\n\
                    Aldea Azalea,Ciudad Safiro,3\n\
                    Pueblo Paleta,Ciudad Safiro,10.5\n";
        let edges = edges_from_csv(data.as_bytes(), &LoadParams::default()).unwrap();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[0], RouteEdge::new("Pueblo Paleta", "Aldea Azalea", 5.));
        assert_eq!(edges[2].get_cost(), 10.5);
    } // end of load_spanish_header


    #[test]
    fn load_english_header_extra_column() {
        log_init_test();
        //
        let data = "origin, destination, cost, comment\n Aldea Fuego , Ciudad Lavanda , 7 , by sea\n";
        let edges = edges_from_csv(data.as_bytes(), &LoadParams::default()).unwrap();
        assert_eq!(edges, vec![RouteEdge::new("Aldea Fuego", "Ciudad Lavanda", 7.)]);
    }


    #[test]
    fn load_with_delimiter() {
        log_init_test();
        //
        let data = "estacion;destino;costo\nPueblo Paleta;Aldea Fuego;2\n";
        let edges = edges_from_csv(data.as_bytes(), &LoadParams::new(b';')).unwrap();
        assert_eq!(edges[0].get_destination(), "Aldea Fuego");
        // negative costs pass through
        let data = "estacion,destino,costo\nPueblo Paleta,Aldea Fuego,-2\n";
        let edges = edges_from_csv(data.as_bytes(), &LoadParams::default()).unwrap();
        assert_eq!(edges[0].get_cost(), -2.);
    }


    #[test]
    fn bad_cost_is_malformed() {
        log_init_test();
        //
        let data = "estacion,destino,costo\nPueblo Paleta,Aldea Azalea,5\nAldea Azalea,Ciudad Safiro,three\n";
        match edges_from_csv(data.as_bytes(), &LoadParams::default()) {
            Err(RouteError::MalformedRecord{record, ..}) => assert_eq!(record, 2),
            other => panic!("expected MalformedRecord, got {:?}", other),
        }
        let data = "estacion,destino,costo\nPueblo Paleta,Aldea Azalea,\n";
        assert!(matches!(edges_from_csv(data.as_bytes(), &LoadParams::default()), Err(RouteError::MalformedRecord{record : 1, ..})));
        // non finite costs
        let data = "estacion,destino,costo\nPueblo Paleta,Aldea Azalea,NaN\n";
        assert!(matches!(edges_from_csv(data.as_bytes(), &LoadParams::default()), Err(RouteError::MalformedRecord{record : 1, ..})));
        let data = "estacion,destino,costo\nPueblo Paleta,Aldea Azalea,5\nAldea Azalea,Ciudad Safiro,inf\n";
        assert!(matches!(edges_from_csv(data.as_bytes(), &LoadParams::default()), Err(RouteError::MalformedRecord{record : 2, ..})));
        let data = "estacion,destino,costo\nPueblo Paleta,Aldea Azalea,-inf\n";
        assert!(matches!(edges_from_csv(data.as_bytes(), &LoadParams::default()), Err(RouteError::MalformedRecord{record : 1, ..})));
    }


    #[test]
    fn missing_field_is_malformed() {
        log_init_test();
        //
        // no cost column
        let data = "estacion,destino\nPueblo Paleta,Aldea Azalea\n";
        assert!(matches!(edges_from_csv(data.as_bytes(), &LoadParams::default()), Err(RouteError::MalformedRecord{record : 1, ..})));
        // short row
        let data = "estacion,destino,costo\nPueblo Paleta,Aldea Azalea,1\nCiudad Safiro,4\n";
        assert!(matches!(edges_from_csv(data.as_bytes(), &LoadParams::default()), Err(RouteError::MalformedRecord{record : 2, ..})));
        // empty name
        let data = "estacion,destino,costo\n,Aldea Azalea,1\n";
        match edges_from_csv(data.as_bytes(), &LoadParams::default()) {
            Err(RouteError::MalformedRecord{record, reason}) => {
                assert_eq!(record, 1);
                assert_eq!(reason, "missing origin");
            },
            other => panic!("expected MalformedRecord, got {:?}", other),
        }
    } // end of missing_field_is_malformed


    #[test]
    fn missing_file() {
        log_init_test();
        //
        let res = graph_from_csv_file(Path::new("no/such/rutas.csv"), &LoadParams::default());
        assert!(matches!(res, Err(RouteError::Io{..})));
    }


    #[test]
    fn load_data_file() {
        log_init_test();
        //
        let filepath = Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join("rutas.csv");
        let graph = graph_from_csv_file(&filepath, &LoadParams::default()).unwrap();
        assert_eq!(graph.nb_nodes(), 5);
        assert!(graph.has_node("Ciudad Lavanda"));
        let filepath = Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join("locations.csv");
        let table = locations_from_csv_file(&filepath, &LoadParams::default()).unwrap();
        assert_eq!(table.len(), 5);
        for (index, name) in table.iter() {
            assert_eq!(LocationTable::default().get_name(index), Some(name));
        }
    }


    #[test]
    fn load_locations() {
        log_init_test();
        //
        let data = "indice,nombre\n1,Pueblo Paleta\n2,Isla Canela\n";
        let table = locations_from_csv(data.as_bytes(), &LoadParams::default()).unwrap();
        assert_eq!(table.get_name(2), Some("Isla Canela"));
        let data = "index,name\n1,Pueblo Paleta\nzero,Isla Canela\n";
        assert!(matches!(locations_from_csv(data.as_bytes(), &LoadParams::default()), Err(RouteError::MalformedLocation{record : 2, ..})));
        let data = "index,name\n1,Pueblo Paleta\n1,Isla Canela\n";
        assert!(matches!(locations_from_csv(data.as_bytes(), &LoadParams::default()), Err(RouteError::MalformedLocation{record : 2, ..})));
    }

} // end of mod tests
