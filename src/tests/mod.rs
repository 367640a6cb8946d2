
// Sign analysis tests
mod sign;

// Interval tests
mod intervals;
