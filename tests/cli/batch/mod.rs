mod empty_csv_contract;
mod row_isolation_contract;
mod strict_contract;
