//! Core library for the checkout-forms command line application.
//!
//! The library turns a student roster and an equipment inventory into two
//! printable HTML documents: the semester checkout/late-fee form and the
//! equipment hang tags. Responsibilities are kept narrow: CSV loading and
//! file output live under [`vat::checkout::io`], records in
//! [`vat::checkout::model`], the weekly schedule in [`vat::checkout::calendar`],
//! document assembly in [`vat::checkout::assemble`] over the typed tree in
//! [`vat::checkout::markup`], and the end-to-end run in
//! [`vat::checkout::generate`].

pub mod vat;

pub use vat::checkout::{
    Result, ToolError, assemble, calendar, config, error, generate, io, markup, model,
};
