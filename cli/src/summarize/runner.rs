use std::{fmt, io};

use anyhow::{anyhow, Error};

use ancpoly_core::{
    frequencies::{Vector, NO_VALUES},
    tree::{Node, VARIANTS},
    Frequencies,
};

#[derive(Debug)]
pub struct Runner<W> {
    writer: W,
    nodes: Vec<Node>,
    header: bool,
    delimiter: char,
    precision: usize,
}

impl<W> Runner<W>
where
    W: io::Write,
{
    pub fn new(
        writer: W,
        nodes: Vec<Node>,
        header: bool,
        delimiter: char,
        precision: usize,
    ) -> Self {
        Self {
            writer,
            nodes,
            header,
            delimiter,
            precision,
        }
    }

    pub fn run<I>(&mut self, realizations: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = io::Result<Frequencies>>,
    {
        let means = mean(realizations)?;

        if self.header {
            self.write_header()?;
        }

        for node in self.nodes.clone() {
            self.write_node(node, means.get_node(node))?;
        }

        Ok(())
    }

    fn write_header(&mut self) -> Result<(), Error> {
        let names = std::iter::once(String::from("node"))
            .chain(VARIANTS.iter().map(|v| v.to_string()))
            .collect::<Vec<_>>();

        self.write_with_delimiter(names)
    }

    fn write_node(&mut self, node: Node, mean: &Vector) -> Result<(), Error> {
        let fields = std::iter::once(node.name().to_string())
            .chain(
                mean.iter()
                    .map(|x| format!("{x:.precision$}", precision = self.precision)),
            )
            .collect::<Vec<_>>();

        self.write_with_delimiter(fields)
    }

    fn write_with_delimiter<T>(&mut self, items: T) -> Result<(), Error>
    where
        T: IntoIterator,
        T::Item: fmt::Display,
    {
        for (i, x) in items.into_iter().enumerate() {
            if i > 0 {
                write!(self.writer, "{}", self.delimiter)?;
            }
            write!(self.writer, "{x}")?;
        }
        writeln!(self.writer)?;

        Ok(())
    }
}

/// Returns the mean frequencies across realizations.
fn mean<I>(realizations: I) -> Result<Frequencies, Error>
where
    I: IntoIterator<Item = io::Result<Frequencies>>,
{
    let mut sums = [0.0; NO_VALUES];
    let mut n = 0usize;

    for realization in realizations {
        let realization = realization?;
        sums.iter_mut()
            .zip(realization.as_slice())
            .for_each(|(sum, x)| *sum += x);
        n += 1;
    }

    if n == 0 {
        return Err(anyhow!("no realizations found in input"));
    }

    log::info!("Summarized {n} realizations");

    Ok(Frequencies::new(sums.map(|sum| sum / n as f64)))
}

#[cfg(test)]
mod tests {
    use super::*;

    use ancpoly_core::io::read::Reader;

    fn realization(x: f64) -> io::Result<Frequencies> {
        Ok(Frequencies::new([x; NO_VALUES]))
    }

    #[test]
    fn test_mean() {
        let means = mean([realization(0.1), realization(0.3)]).unwrap();

        assert!(means.as_slice().iter().all(|x| (x - 0.2).abs() < 1e-12));
    }

    #[test]
    fn test_mean_empty() {
        let result = mean(Vec::<io::Result<Frequencies>>::new());

        assert_eq!(
            result.unwrap_err().to_string(),
            "no realizations found in input"
        );
    }

    #[test]
    fn test_run() {
        let src = format!(
            "{}{}",
            "1 0 0 0 ".repeat(9) + "\n",
            "0 0.5 0.5 0 ".repeat(9) + "\n"
        );

        let nodes = vec![Node::ROOT, Node::new(8).unwrap()];
        let mut runner = Runner::new(Vec::new(), nodes, true, ',', 2);
        runner.run(Reader::new(src.as_bytes())).unwrap();

        assert_eq!(
            String::from_utf8(runner.writer).unwrap(),
            "node,A,C,G,T\nroot,0.50,0.25,0.25,0.00\nschweinfurthii,0.50,0.25,0.25,0.00\n"
        );
    }

    #[test]
    fn test_run_malformed() {
        let mut runner = Runner::new(Vec::new(), vec![Node::ROOT], false, '\t', 6);

        let result = runner.run(Reader::new(&b"0.5 0.5\n"[..]));

        assert!(result.is_err());
        assert!(runner.writer.is_empty());
    }
}
