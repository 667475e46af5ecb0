mod batch;
mod run;
