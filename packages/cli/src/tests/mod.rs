// ABOUTME: Unit test modules for the folio-cli crate
// ABOUTME: Grouped by the area of the crate they exercise
