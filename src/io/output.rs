//! To describe dump of route graph for visualization


use std::fs::OpenOptions;
use std::io::{Write, BufWriter};
use std::path::{Path, PathBuf};

use petgraph::dot::Dot;

use crate::error::{Result, RouteError};
use crate::routegraph::RouteGraph;


/// only Graphviz dot now.
#[derive(Copy, Clone, Debug)]
pub enum Format {
    DOT,
}

pub struct Output {
    /// describe output format
    fmt : Format,
    /// name of output file
    output_name : String,
}

impl Output {
    /// if output_name is None, default output_name will be "rutas.dot"
    pub fn new(fmt : Format, output_name : &Option<String>) -> Self {
        let output_name = match output_name {
            Some(name) => {
                if name.ends_with(".dot") {
                    name.clone()
                }
                else {
                    let mut dot_name = name.clone();
                    dot_name.push_str(".dot");
                    dot_name
                }
            },
            None => String::from("rutas.dot"),
        };
        Output{fmt, output_name}
    }
    /// get ouput format
    pub fn get_fmt(&self) -> Format { self.fmt }

    /// get output_name
    pub fn get_output_name(&self) -> &String { &self.output_name }

    /// dumps graph in file output_name. returns path of file
    pub fn dump(&self, graph : &RouteGraph) -> Result<PathBuf> {
        let path = PathBuf::from(&self.output_name);
        let to_io = |e : std::io::Error| RouteError::Io{path : path.clone(), source : e};
        let file = OpenOptions::new().write(true).create(true).truncate(true).open(&path).map_err(|e| {
            log::error!("Output::dump could not open file {:?}", path.as_os_str());
            to_io(e)
        })?;
        let mut bufwriter = BufWriter::new(file);
        match self.fmt {
            Format::DOT => { write_dot(graph, &mut bufwriter, &path)?; },
        }
        bufwriter.flush().map_err(to_io)?;
        log::info!("graph dumped in {:?}", path.as_os_str());
        Ok(path)
    } // end of dump

}  // end of Output


impl Default for Output {
    fn default() -> Self {
        Output{fmt : Format::DOT, output_name : String::from("rutas.dot")}
    }
}


/// writes the graph as an undirected Graphviz document: nodes labelled by name, edges by cost.
/// path is only used to report errors.
pub fn write_dot<W : Write>(graph : &RouteGraph, writer : &mut W, path : &Path) -> Result<()> {
    // circo gives the circular layout the menu has always shown
    writeln!(writer, "// layout with: circo -Tpng").map_err(|e| RouteError::Io{path : path.to_path_buf(), source : e})?;
    write!(writer, "{}", Dot::new(graph.get_graph())).map_err(|e| RouteError::Io{path : path.to_path_buf(), source : e})?;
    Ok(())
} // end of write_dot


//=========================================================================================


// end of mod tests
