use crate::myers::EditOperation;
use std::fmt::Display;

pub const CSV_HEADER: &str = "op,pos,item";

/// Renders operations in the `op,pos,item` format.
pub trait ToCsv {
    fn to_csv(&self) -> String;
}

fn join<T: Display>(text: &[T]) -> String {
    text.iter().map(ToString::to_string).collect()
}

impl<T: Display> ToCsv for EditOperation<T> {
    fn to_csv(&self) -> String {
        let marker = self.kind().marker();
        match self {
            // deletions only report how many symbols went away
            EditOperation::Delete { position, text } => {
                format!("{},{},{}", marker, position, text.len())
            }
            EditOperation::Insert { position, text } | EditOperation::Update { position, text } => {
                format!("{},{},'{}'", marker, position, join(text))
            }
        }
    }
}

impl<T: Display> ToCsv for [EditOperation<T>] {
    fn to_csv(&self) -> String {
        std::iter::once(CSV_HEADER.to_string())
            .chain(self.iter().map(ToCsv::to_csv))
            .collect::<Vec<String>>()
            .join("\n")
    }
}

impl<T: Display> ToCsv for Vec<EditOperation<T>> {
    fn to_csv(&self) -> String {
        self.as_slice().to_csv()
    }
}
