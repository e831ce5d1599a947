pub mod dataset_file;
