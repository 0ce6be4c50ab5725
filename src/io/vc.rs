use std::io::{self, BufWriter, Write};

use crate::graph::VertexCover;

/// Writes `vc` as `c vc size = K`, `p vc <nodes> <edges>` and one edge per line.
pub fn write_vertex_cover(writer: &mut impl Write, vc: &VertexCover) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);
    let graph = vc.graph();

    writeln!(writer, "c vc size = {}", vc.cover_size())?;
    writeln!(writer, "p vc {} {}", graph.node_count(), graph.edge_count())?;
    for (u, v) in graph.edges() {
        writeln!(writer, "{u} {v}")?;
    }

    writer.flush()
}
