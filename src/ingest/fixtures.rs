/// Test fixtures: representative run-up tables and climate series.
///
/// Tables follow the layout of the compiled run-up database: one row per
/// observation, comma separated, with a header row. Line numbers noted in
/// the comments are what the parser reports for rejected rows.

/// Two field observations on the same beach that differ only in slope.
/// ε ≈ 0.354 (dissipative) and ε ≈ 1.414 (intermediate).
pub(crate) fn fixture_two_beach_table() -> &'static str {
    "dataset,beach,case,lab_field,hs,tp,beta,d50,roughness,r2
A,B1,1,field,2.0,8.0,0.05,0.0003,1.0,1.2
A,B1,2,field,2.0,8.0,0.2,0.0003,1.0,1.2
"
}

/// Mixed-quality table.
///   line 4: non-numeric hs            → MalformedRecord (parse)
///   line 5: hs = 0                    → InvalidArgument (analysis)
///   line 7: unknown lab_field label   → MalformedRecord (parse)
pub(crate) fn fixture_mixed_quality_table() -> &'static str {
    "dataset,beach,case,lab_field,hs,tp,beta,d50,roughness,r2
A,B1,1,field,2.0,8.0,0.05,0.0003,1.0,1.2
A,B2,2,field,1.1,10.0,0.09,0.0005,1.0,1.0
B,F1,3,lab,abc,2.0,0.1,0.0002,1.0,0.2
B,F1,4,lab,0.0,2.0,0.1,0.0002,1.0,0.2
B,F1,5,lab,0.12,2.2,0.1,0.0002,1.0,0.21
C,X1,6,numerical,0.5,4.0,0.1,0.0002,1.0,0.4
"
}

/// Comment block, header on line 3, blank line 4, data on lines 5 and 6.
pub(crate) fn fixture_commented_table() -> &'static str {
    "# Compiled run-up observations
# units: m, s
dataset,beach,case,lab_field,hs,tp,beta,d50,roughness,r2

A,B1,1,field,2.0,8.0,0.05,0.0003,1.0,1.2
A,B1,2,field,1.5,9.0,0.08,0.0003,1.0,1.1
"
}

/// Header lacks the r2 column.
pub(crate) fn fixture_missing_r2_table() -> &'static str {
    "dataset,beach,case,lab_field,hs,tp,beta,d50,roughness
A,B1,1,field,2.0,8.0,0.05,0.0003,1.0
"
}

/// Monthly climate index, one value missing (empty) and one NaN.
pub(crate) fn fixture_climate_index() -> &'static str {
    "date,soi
2020-01,0.5
2020-02,-0.3
2020-03,
2020-04,1.1
2020-05,NaN
2020-06,0.2
"
}

/// Daily mean significant wave height, two days per month.
pub(crate) fn fixture_daily_wave_heights() -> &'static str {
    "date,hs
2020-01-10,1.8
2020-01-20,2.2
2020-02-10,1.4
2020-02-20,1.6
2020-04-10,2.6
2020-04-20,2.4
2020-07-10,1.0
2020-07-20,1.2
"
}
